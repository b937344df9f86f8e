use crate::geonear::input::{self, Input};
use std::io::{self, BufRead};

/// Iterates the non-blank lines of a line-delimited source as classified
/// inputs. Read failures end iteration with an `Err`.
pub struct Reader<'a> {
    reader: &'a mut dyn BufRead,
}

impl<'a> Reader<'a> {
    pub fn new(reader: &'a mut dyn BufRead) -> Reader<'a> {
        Reader { reader }
    }
}

fn read_line(buf_read: &mut dyn BufRead) -> Option<io::Result<String>> {
    let mut buf = String::new();
    match buf_read.read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => Some(Ok(buf)),
        Err(e) => Some(Err(e)),
    }
}

impl<'a> Iterator for Reader<'a> {
    type Item = io::Result<Input>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match read_line(&mut *self.reader)? {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => return Some(Ok(input::read_line(&line))),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
