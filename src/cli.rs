use std::io::Write;
use std::panic;
use std::panic::PanicInfo;
use std::process::exit;

use atty::Stream;
use clap::CommandFactory;
use clap::FromArgMatches;
use clap::Parser as CliParser;
use clap::Subcommand;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use tabvec::{Container, Error, Stack, Vector};

pub fn run() {
    let command = (Cli::command() as clap::Command).color(clap::ColorChoice::Auto);
    let cli: Cli = Cli::from_arg_matches(&command.get_matches()).unwrap();

    let context = Context::new();
    context.run(cli.demo);
}

/// Installs a nicer panic that tells the user about the crash before printing
/// the usual backtrace
pub fn setup_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| panic_hook(info, &default_hook)));
}

fn panic_hook(info: &PanicInfo, default_hook: &dyn Fn(&PanicInfo)) {
    let color = if atty::is(Stream::Stderr) {
        termcolor::ColorChoice::Auto
    } else {
        termcolor::ColorChoice::Never
    };

    let mut red = ColorSpec::new();
    red.set_fg(Some(Color::Red));

    let mut reset = ColorSpec::new();
    reset.set_reset(true);

    let mut stderr = StandardStream::stderr(color);
    let _ = stderr.set_color(&red);
    let _ = writeln!(
        stderr,
        "Fatal internal error, this is a bug. Please report this to the developers"
    );
    let _ = stderr.set_color(&reset);

    default_hook(info);
}

#[derive(CliParser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(subcommand)]
    demo: Demo,
}

#[derive(Subcommand)]
enum Demo {
    /// Build a vector, push values onto it and print the result
    Vector {
        /// Number of pre-filled elements
        #[clap(short, long, default_value_t = 3)]
        fill: usize,

        /// Value to pre-fill with
        #[clap(short, long, default_value_t = 5)]
        value: i64,

        /// Probe this index after pushing
        #[clap(long)]
        at: Option<usize>,

        /// Values to push after the pre-fill
        values: Vec<i64>,
    },

    /// Push values onto a stack, then pop and print them in LIFO order
    Stack { values: Vec<i64> },

    /// Print only the values at or above a threshold
    Filter {
        #[clap(short, long, default_value_t = 0)]
        min: i64,

        values: Vec<i64>,
    },
}

struct Context {
    stdout: StandardStream,
    stderr: StandardStream,
}

impl Context {
    fn new() -> Self {
        // Matches clap's semantics
        let color_for = |stream| {
            if atty::is(stream) {
                termcolor::ColorChoice::Auto
            } else {
                termcolor::ColorChoice::Never
            }
        };

        Self {
            stdout: StandardStream::stdout(color_for(Stream::Stdout)),
            stderr: StandardStream::stderr(color_for(Stream::Stderr)),
        }
    }

    fn run(mut self, demo: Demo) {
        let result = match demo {
            Demo::Vector {
                fill,
                value,
                at,
                values,
            } => self.run_vector(fill, value, at, values),
            Demo::Stack { values } => self.run_stack(values),
            Demo::Filter { min, values } => self.run_filter(min, values),
        };

        if let Err(err) = result {
            self.exit_with_error(err.to_string());
        }
    }

    fn run_vector(
        &mut self,
        fill: usize,
        value: i64,
        at: Option<usize>,
        values: Vec<i64>,
    ) -> Result<(), Error> {
        let mut vector = Vector::with_fill(fill, value);

        for value in values {
            vector.push_back(value);
        }

        self.print_heading("elements");
        for value in vector.iter() {
            self.println(format!("{}", value));
        }

        self.print_heading("size");
        self.println(format!("{} of {} slots", vector.len(), vector.capacity()));

        if let Some(index) = at {
            let probed = vector.element(index)?;
            self.print_heading(&format!("element {}", index));
            self.println(format!("{}", probed));
        }

        Ok(())
    }

    fn run_stack(&mut self, values: Vec<i64>) -> Result<(), Error> {
        let mut stack: Stack<i64> = Stack::new();

        for value in values {
            stack.push(value);
        }

        self.print_heading("popped");
        while !stack.is_empty() {
            self.println(format!("{}", stack.pop()?));
        }

        Ok(())
    }

    fn run_filter(&mut self, min: i64, values: Vec<i64>) -> Result<(), Error> {
        let vector: Vector<i64> = values.into_iter().collect();

        self.print_heading(&format!("values >= {}", min));
        for value in vector.iter_filtered(|value| *value >= min) {
            self.println(format!("{}", value));
        }

        Ok(())
    }

    fn print_heading(&mut self, heading: &str) {
        let mut color = ColorSpec::new();
        color.set_bold(true);
        color.set_fg(Some(Color::Blue));

        let mut reset = ColorSpec::new();
        reset.set_reset(true);

        let _ = self.stdout.set_color(&color);
        let _ = writeln!(self.stdout, "{}:", heading);
        let _ = self.stdout.set_color(&reset);
    }

    fn println(&mut self, message: impl AsRef<str>) {
        let _ = writeln!(self.stdout, "{}", message.as_ref());
    }

    /// Print an error message and exit
    fn exit_with_error(&mut self, message: impl AsRef<str>) -> ! {
        let mut red = ColorSpec::new();
        red.set_fg(Some(Color::Red));
        red.set_bold(true);

        let mut reset = ColorSpec::new();
        reset.set_reset(true);

        let _ = self.stderr.set_color(&red);
        let _ = write!(self.stderr, "error: ");
        let _ = self.stderr.set_color(&reset);
        let _ = writeln!(self.stderr, "{}", message.as_ref());

        exit(1);
    }
}
