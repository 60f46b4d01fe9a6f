use flo_svg_path::*;

use std::io;
use std::io::prelude::*;

///
/// The ways the diagnostic tool can describe a compiled path
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum OutputFormat {
    /// The path operations as a JSON array
    Json,

    /// One path operation per line
    Text,

    /// Just the bounding box of the path
    Bounds
}

///
/// Writes the result of compiling a path to the specified output stream
///
pub fn write_path<Output: Write>(output: &mut Output, ops: &[PathOp], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(ops).map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
            writeln!(output, "{}", json)?;
        }

        OutputFormat::Text => {
            for op in ops.iter() {
                writeln!(output, "{:?}", op)?;
            }
        }

        OutputFormat::Bounds => {
            let mut bounds = PathBounds::new();
            for op in ops.iter() {
                bounds.draw(*op);
            }

            match bounds.bounds() {
                Some(((minx, miny), (maxx, maxy)))  => writeln!(output, "{} {} {} {}", minx, miny, maxx, maxy)?,
                None                                => writeln!(output, "(empty)")?
            }
        }
    }

    Ok(())
}
