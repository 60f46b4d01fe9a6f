///
/// A command letter and the text of its arguments
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSegment<'a> {
    pub letter:     char,
    pub arguments:  &'a str
}

///
/// Iterator that splits path data into command segments
///
pub struct PathSegments<'a> {
    path:       &'a str,
    remaining:  Option<usize>
}

///
/// True if a character starts a new command (`e` and `E` are exponent markers in numbers)
///
#[inline]
fn is_command_letter(chr: char) -> bool {
    chr.is_alphabetic() && chr != 'e' && chr != 'E'
}

///
/// Splits path data into the segments for each command, in order
///
/// Anything before the first command letter is ignored.
///
pub fn split_path<'a>(path: &'a str) -> PathSegments<'a> {
    PathSegments {
        path,
        remaining:  path.char_indices().find(|(_, chr)| is_command_letter(*chr)).map(|(idx, _)| idx)
    }
}

impl<'a> Iterator for PathSegments<'a> {
    type Item = PathSegment<'a>;

    fn next(&mut self) -> Option<PathSegment<'a>> {
        let start           = self.remaining?;
        let mut chars       = self.path[start..].char_indices();
        let (_, letter)     = chars.next()?;

        // The arguments continue until the next command letter
        let end             = chars.find(|(_, chr)| is_command_letter(*chr)).map(|(idx, _)| start + idx);
        let arguments_start = start + letter.len_utf8();

        self.remaining      = end;

        Some(PathSegment {
            letter,
            arguments:  &self.path[arguments_start..end.unwrap_or(self.path.len())]
        })
    }
}
