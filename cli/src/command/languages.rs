use std::io::{self, Write};

use crate::Language;

pub fn handle_command() -> anyhow::Result<()> {
    let stdout = io::stdout();
    write_languages(&mut stdout.lock())?;
    Ok(())
}

fn write_languages<W: Write>(out: &mut W) -> io::Result<()> {
    for lang in Language::ALL {
        writeln!(out, "{}\t{}", lang.id(), lang.display_name())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_language() {
        let mut buf = Vec::new();
        write_languages(&mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();

        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), Language::ALL.len());
        assert_eq!(lines[0], "c\tC");
        assert_eq!(lines[1], "cpp\tC++");
        assert_eq!(lines[10], "csharp\tC#");
    }
}
