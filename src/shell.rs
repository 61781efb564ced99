//! The interactive prompt loop.
//!
//! Reads one link, shows the decoded node, and optionally writes the Clash
//! config. Parameterized over the input/output streams so tests can drive
//! it with buffers.

use std::io::{self, BufRead, Write};
use std::path::Path;

use log::info;

use crate::generator::config::render_clash_config;
use crate::parser::{explode, LinkError};
use crate::utils::write_file;

/// Run one convert session: prompt until a link decodes, display it, then
/// offer to write the config to `config_path`.
pub fn run_shell<R, W>(input: &mut R, output: &mut W, config_path: &Path) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "Convert a VMess, VLESS or Hysteria2 share link into a Clash configuration."
    )?;

    let record = loop {
        write!(output, "Link: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF before any valid link, nothing to do.
            return Ok(());
        }

        match explode(&line) {
            Ok(record) => break record,
            Err(LinkError::UnrecognizedScheme(_)) => {
                writeln!(
                    output,
                    "Unrecognized link, expected a vmess://, vless:// or hysteria2:// prefix."
                )?;
            }
            Err(e) => {
                writeln!(output, "Failed to decode link: {}", e)?;
            }
        }
    };

    writeln!(output, "Node info:")?;
    writeln!(output, "===================")?;
    write!(output, "{}", record)?;
    writeln!(output, "===================")?;

    write!(
        output,
        "Save the Clash config to {}? (Y/n): ",
        config_path.display()
    )?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    if !answer_is_yes(&answer) {
        return Ok(());
    }

    // Render only once a fully valid record exists; never write a partial file.
    let document = render_clash_config(&record)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    write_file(config_path, &document)?;

    writeln!(output, "Configuration saved to {}.", config_path.display())?;
    info!("configuration written to {}", config_path.display());

    Ok(())
}

/// Empty input defaults to yes; otherwise case-insensitive `y`.
fn answer_is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.is_empty() || answer.eq_ignore_ascii_case("y")
}
