//! armscope - an A64 disassembler
//!
//! Usage:
//!   armscope <file>                 Disassemble raw little-endian A64 code
//!   armscope - < code.bin           Read the code from stdin
//!   armscope --words d503201f ...   Disassemble literal instruction words
//!   armscope <file> --json          Emit one JSON object per word

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use armscope_core::{FormatOptions, Instruction};
use armscope_disasm::{DecodeError, DisassembledWord, Disassembly, StreamError};
use clap::{ArgAction, Parser};
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "armscope")]
#[command(about = "Disassemble raw A64 machine code", long_about = None)]
struct Cli {
    /// File of raw little-endian code, or `-` for stdin
    #[arg(required_unless_present = "words", conflicts_with = "words")]
    input: Option<PathBuf>,

    /// Decode these hexadecimal instruction words instead of a file
    #[arg(long, num_args = 1.., value_parser = parse_word)]
    words: Vec<u32>,

    /// Address of the first word
    #[arg(short, long, value_parser = parse_hex, default_value = "0")]
    address: u64,

    /// Bytes to skip before the first word
    #[arg(short, long, default_value_t = 0)]
    offset: u64,

    /// Maximum number of words to disassemble
    #[arg(short, long)]
    count: Option<usize>,

    /// Print immediates in decimal
    #[arg(long)]
    decimal: bool,

    /// Emit one JSON object per word
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_hex(s: &str) -> Result<u64, String> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    u64::from_str_radix(s, 16).map_err(|e| e.to_string())
}

fn parse_word(s: &str) -> Result<u32, String> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    u32::from_str_radix(s, 16).map_err(|e| format!("invalid instruction word: {e}"))
}

/// JSON form of one disassembled word.
#[derive(Serialize)]
struct JsonWord<'a> {
    address: u64,
    word: u32,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    instruction: Option<&'a Instruction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a DisassembledWord> for JsonWord<'a> {
    fn from(line: &'a DisassembledWord) -> Self {
        Self {
            address: line.address,
            word: line.word,
            text: &line.text,
            instruction: line.result.as_ref().ok(),
            error: line.result.as_ref().err().map(ToString::to_string),
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "armscope=warn",
        1 => "armscope=info",
        2 => "armscope=debug",
        _ => "armscope=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let reader: Box<dyn Read> = if !cli.words.is_empty() {
        let bytes: Vec<u8> = cli.words.iter().flat_map(|w| w.to_le_bytes()).collect();
        Box::new(io::Cursor::new(bytes))
    } else {
        match cli.input.as_deref() {
            Some(path) if path.as_os_str() == "-" => Box::new(io::stdin().lock()),
            Some(path) => {
                let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
                Box::new(BufReader::new(file))
            }
            None => bail!("no input given"),
        }
    };

    let options = FormatOptions { decimal_immediates: cli.decimal };
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = disassemble(reader, &cli, options, &mut out)?;
    out.flush().context("Cannot write output")?;

    info!(words = summary.words, failed = summary.failed, "done");
    Ok(())
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    words: usize,
    failed: usize,
}

fn disassemble<R: Read, W: Write>(mut reader: R, cli: &Cli, options: FormatOptions, out: &mut W) -> Result<Summary> {
    if cli.offset > 0 {
        let skipped = io::copy(&mut reader.by_ref().take(cli.offset), &mut io::sink())
            .context("Cannot skip to the requested offset")?;
        if skipped < cli.offset {
            bail!("offset {:#x} is past the end of the input ({skipped:#x} bytes)", cli.offset);
        }
        debug!(offset = cli.offset, "skipped leading bytes");
    }

    let stream = Disassembly::new(reader, cli.address).with_options(options);
    let mut summary = Summary::default();
    for line in stream.take(cli.count.unwrap_or(usize::MAX)) {
        let line = match line {
            Ok(line) => line,
            Err(StreamError::Decode(e @ DecodeError::Truncated { .. })) => {
                warn!("{e}");
                break;
            }
            Err(e) => return Err(e).context("Cannot read input"),
        };
        summary.words += 1;
        if !line.is_ok() {
            summary.failed += 1;
        }
        if cli.json {
            serde_json::to_writer(&mut *out, &JsonWord::from(&line)).context("Cannot serialize word")?;
            writeln!(out)?;
        } else {
            writeln!(out, "{:#010x}:  {:08x}  {}", line.address, line.word, line.text)?;
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("armscope").chain(args.iter().copied())).expect("valid arguments")
    }

    fn run(args: &[&str], bytes: &[u8]) -> (String, Summary) {
        let cli = cli(args);
        let options = FormatOptions { decimal_immediates: cli.decimal };
        let mut out = Vec::new();
        let summary = disassemble(bytes, &cli, options, &mut out).expect("disassemble");
        (String::from_utf8(out).expect("utf-8 output"), summary)
    }

    fn code(words: &[u32]) -> Vec<u8> {
        words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("0x1000"), Ok(0x1000));
        assert_eq!(parse_hex("ff"), Ok(0xff));
        assert!(parse_hex("zz").is_err());
        assert_eq!(parse_word("d503201f"), Ok(0xd503201f));
        assert!(parse_word("1d503201f").is_err());
    }

    #[test]
    fn test_text_output() {
        let (out, summary) = run(&["-", "-a", "0x4000"], &code(&[0xd503201f, 0xd65f03c0]));
        assert_eq!(out, "0x00004000:  d503201f  nop\n0x00004004:  d65f03c0  ret\n");
        assert_eq!(summary, Summary { words: 2, failed: 0 });
    }

    #[test]
    fn test_offset_and_count() {
        let bytes = code(&[0xd503201f, 0x91000420, 0xd65f03c0]);
        let (out, summary) = run(&["-", "-o", "4", "-c", "1", "--decimal"], &bytes);
        assert_eq!(out, "0x00000000:  91000420  add\tx0, x1, #1\n");
        assert_eq!(summary.words, 1);
    }

    #[test]
    fn test_offset_past_end() {
        let cli = cli(&["-", "-o", "16"]);
        let err = disassemble(&[0u8; 4][..], &cli, FormatOptions::default(), &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("past the end"));
    }

    #[test]
    fn test_failures_and_truncation() {
        let mut bytes = code(&[0x00000000, 0xd503201f]);
        bytes.push(0xff);
        let (out, summary) = run(&["-"], &bytes);
        assert_eq!(out, "0x00000000:  00000000  .inst 0x00000000\n0x00000004:  d503201f  nop\n");
        assert_eq!(summary, Summary { words: 2, failed: 1 });
    }

    #[test]
    fn test_json_output() {
        let (out, _) = run(&["-", "--json"], &code(&[0xd65f03c0, 0x91800000]));
        let lines: Vec<serde_json::Value> =
            out.lines().map(|l| serde_json::from_str(l).expect("valid JSON")).collect();
        assert_eq!(lines[0]["text"], "ret");
        assert_eq!(lines[0]["word"], 0xd65f03c0u32);
        assert!(lines[0]["instruction"].is_object());
        assert!(lines[0].get("error").is_none());
        assert_eq!(lines[1]["text"], ".inst 0x91800000");
        assert!(lines[1]["error"].as_str().is_some_and(|e| e.starts_with("reserved encoding")));
    }

    #[test]
    fn test_words_conflict_with_input() {
        let result = Cli::try_parse_from(["armscope", "code.bin", "--words", "d503201f"]);
        assert!(result.is_err());
        assert!(Cli::try_parse_from(["armscope"]).is_err());
    }
}
