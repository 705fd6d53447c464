use clap::{Parser, ValueEnum};
use std::fmt::Display;
use std::io;
use std::num::NonZeroUsize;

use stdread::{BufferedReader, Error, Reader};

mod output_writer;
use output_writer::OutputWriter;

/// Scan typed values from standard input and print them one per line
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Kinds of values to read, in order
    #[arg(value_enum, required = true)]
    kinds: Vec<Kind>,

    /// Keep one buffered reader over stdin for the whole run
    #[arg(long)]
    buffered: bool,

    /// Read-ahead window size in bytes
    #[arg(long, default_value = "8192", requires = "buffered")]
    capacity: NonZeroUsize,

    /// Cycle through the kinds until the input runs out
    #[arg(long)]
    repeat: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
    Line,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut output = OutputWriter::new(stdout.lock());

    let result = if args.buffered {
        let mut reader = BufferedReader::with_capacity(args.capacity.get(), io::stdin());
        process(&args, &mut output, |kind| scan(&mut reader, kind))
    } else {
        process(&args, &mut output, scan_stdin)
    };
    output.flush()?;
    result
}

/// Installs a stderr subscriber when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }
}

fn process<W, F>(
    args: &Args,
    output: &mut OutputWriter<W>,
    mut read: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    W: io::Write,
    F: FnMut(Kind) -> Result<Box<dyn Display>, Error>,
{
    loop {
        for (i, &kind) in args.kinds.iter().enumerate() {
            let value = match read(kind) {
                Ok(value) => value,
                // running dry between two rounds is the normal way to stop
                Err(err) if args.repeat && i == 0 && err.is_end_of_stream() => return Ok(()),
                Err(err) => return Err(err.into()),
            };
            output.write_value(value.as_ref())?;
        }
        if !args.repeat {
            return Ok(());
        }
    }
}

fn scan<R: Reader>(reader: &mut R, kind: Kind) -> Result<Box<dyn Display>, Error> {
    let value: Box<dyn Display> = match kind {
        Kind::Bool => Box::new(reader.bool()?),
        Kind::Int => Box::new(reader.int()?),
        Kind::Int8 => Box::new(reader.int8()?),
        Kind::Int16 => Box::new(reader.int16()?),
        Kind::Int32 => Box::new(reader.int32()?),
        Kind::Int64 => Box::new(reader.int64()?),
        Kind::Uint => Box::new(reader.uint()?),
        Kind::Uint8 => Box::new(reader.uint8()?),
        Kind::Uint16 => Box::new(reader.uint16()?),
        Kind::Uint32 => Box::new(reader.uint32()?),
        Kind::Uint64 => Box::new(reader.uint64()?),
        Kind::Float32 => Box::new(reader.float32()?),
        Kind::Float64 => Box::new(reader.float64()?),
        Kind::Complex64 => Box::new(reader.complex64()?),
        Kind::Complex128 => Box::new(reader.complex128()?),
        Kind::String => Box::new(reader.string()?),
        Kind::Line => Box::new(reader.line()?),
    };
    Ok(value)
}

/// Reads through the top-level functions, one fresh reader per value.
fn scan_stdin(kind: Kind) -> Result<Box<dyn Display>, Error> {
    let value: Box<dyn Display> = match kind {
        Kind::Bool => Box::new(stdread::bool()?),
        Kind::Int => Box::new(stdread::int()?),
        Kind::Int8 => Box::new(stdread::int8()?),
        Kind::Int16 => Box::new(stdread::int16()?),
        Kind::Int32 => Box::new(stdread::int32()?),
        Kind::Int64 => Box::new(stdread::int64()?),
        Kind::Uint => Box::new(stdread::uint()?),
        Kind::Uint8 => Box::new(stdread::uint8()?),
        Kind::Uint16 => Box::new(stdread::uint16()?),
        Kind::Uint32 => Box::new(stdread::uint32()?),
        Kind::Uint64 => Box::new(stdread::uint64()?),
        Kind::Float32 => Box::new(stdread::float32()?),
        Kind::Float64 => Box::new(stdread::float64()?),
        Kind::Complex64 => Box::new(stdread::complex64()?),
        Kind::Complex128 => Box::new(stdread::complex128()?),
        Kind::String => Box::new(stdread::string()?),
        Kind::Line => Box::new(stdread::line()?),
    };
    Ok(value)
}
