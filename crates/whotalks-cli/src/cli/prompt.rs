//! Interactive script selection: name or URL.

use anyhow::{bail, Result};
use std::io::{BufRead, Write};
use whotalks_core::ScriptSource;

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("no input");
    }
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

/// Asks whether to look up by name, then reads the name or URL.
/// Anything but `y` to the first question selects URL mode.
pub fn prompt_source<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<ScriptSource> {
    let by_name = ask(input, output, "Find movie by name instead of url? (y/n):  ")?;
    if by_name.trim() == "y" {
        let name = ask(input, output, "Enter movie name in lowercase: ")?;
        Ok(ScriptSource::Title(name))
    } else {
        let url = ask(input, output, "Enter url for script hosted on imsdb.com: ")?;
        Ok(ScriptSource::Url(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn yes_selects_title_mode() {
        let mut input = Cursor::new("y\nthe dark knight rises\n");
        let mut output = Vec::new();
        let src = prompt_source(&mut input, &mut output).unwrap();
        assert_eq!(src, ScriptSource::Title("the dark knight rises".into()));
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Find movie by name instead of url? (y/n):"));
        assert!(shown.contains("Enter movie name in lowercase:"));
    }

    #[test]
    fn anything_else_selects_url_mode() {
        let mut input = Cursor::new("n\r\nhttps://www.imsdb.com/scripts/Up.html\r\n");
        let mut output = Vec::new();
        let src = prompt_source(&mut input, &mut output).unwrap();
        assert_eq!(
            src,
            ScriptSource::Url("https://www.imsdb.com/scripts/Up.html".into())
        );

        let mut input = Cursor::new("Y\nhttps://x/\n");
        let src = prompt_source(&mut input, &mut Vec::new()).unwrap();
        assert!(matches!(src, ScriptSource::Url(_)));
    }

    #[test]
    fn eof_is_an_error() {
        let mut input = Cursor::new("y\n");
        assert!(prompt_source(&mut input, &mut Vec::new()).is_err());
    }
}
