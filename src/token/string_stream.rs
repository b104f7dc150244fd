use std::vec;


/// In-memory line source, for scanning directly from strings.
pub struct StringStream {
    lines: vec::IntoIter<String>,
}

impl StringStream {
    pub fn new<S: AsRef<str>>(s: S) -> StringStream {
        let lines = s
            .as_ref()
            .lines()
            .map(str::to_string)
            .collect::<Vec<_>>();
        StringStream {
            lines: lines.into_iter(),
        }
    }
}

impl Iterator for StringStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.lines.next()
    }
}
