use linefeed::{DefaultTerminal, Interface, ReadResult};

/// Characters typed at the console, read one line at a time.
///
/// A line is only requested when the scanner has consumed the
/// previous one, so results print as soon as a statement is done.
/// Each line ends with `'\n'`. Interrupt and end of file end the input.

pub struct Console {
    interface: Interface<DefaultTerminal>,
    line: std::vec::IntoIter<char>,
    done: bool,
}

impl Console {
    pub fn new() -> std::io::Result<Console> {
        let interface = Interface::new("cradle")?;
        interface.set_prompt("> ")?;
        Ok(Console {
            interface,
            line: Vec::new().into_iter(),
            done: false,
        })
    }

    fn read_line(&mut self) {
        match self.interface.read_line() {
            Ok(ReadResult::Input(string)) => {
                let mut chars: Vec<char> = string.chars().collect();
                chars.push('\n');
                self.line = chars.into_iter();
                self.interface.add_history_unique(string);
            }
            Ok(ReadResult::Signal(_)) | Ok(ReadResult::Eof) | Err(_) => self.done = true,
        }
    }
}

impl Iterator for Console {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            if let Some(ch) = self.line.next() {
                return Some(ch);
            }
            if self.done {
                return None;
            }
            self.read_line();
        }
    }
}
