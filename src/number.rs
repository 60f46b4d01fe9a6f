use super::error::*;

use std::str::FromStr;

///
/// Suffixes that are sometimes applied to lengths (such as the width and height of an SVG document)
///
const UNIT_SUFFIXES: [&str; 4] = ["cm", "mm", "px", "pt"];

#[inline]
fn is_exponent(chr: char) -> bool {
    chr == 'e' || chr == 'E'
}

#[inline]
fn is_sign(chr: char) -> bool {
    chr == '-' || chr == '+'
}

///
/// Parses a single number, removing any unit suffix if the text does not end with a digit
///
/// `"12px"` and `"12"` both read as 12.0.
///
pub fn parse_length(text: &str) -> Result<f64, PathError> {
    let trimmed = text.trim();
    let mut number = trimmed;

    if !trimmed.ends_with(|chr: char| chr.is_ascii_digit()) {
        if let Some(suffix) = UNIT_SUFFIXES.iter().find(|suffix| trimmed.ends_with(*suffix)) {
            number = &trimmed[0..trimmed.len()-suffix.len()];
        }
    }

    match f64::from_str(number) {
        Ok(value) if value.is_finite()  => Ok(value),
        _                               => Err(PathError::ParseFailure(text.to_string()))
    }
}

///
/// Reads a run of number characters, which may contain more than one number if there is more
/// than one decimal point (`1.5.5` is the two numbers `1.5` and `.5`)
///
fn read_number_run(run: &str, target: &mut Vec<f64>) -> Result<(), PathError> {
    let mut number_start    = 0;
    let mut seen_point      = false;
    let mut seen_exponent   = false;

    for (idx, chr) in run.char_indices() {
        if chr == '.' {
            if !seen_point && !seen_exponent {
                seen_point = true;
                continue;
            }

            // A second point (or a point in the exponent) begins the next number
            target.push(parse_length(&run[number_start..idx])?);
            number_start    = idx;
            seen_point      = true;
            seen_exponent   = false;
        } else if is_exponent(chr) {
            seen_exponent   = true;
        }
    }

    target.push(parse_length(&run[number_start..])?);

    Ok(())
}

///
/// Reads the numbers in the argument text of a path command, appending them to the target
///
/// Any character that can't be part of a number acts as a separator. A minus sign both ends the
/// previous number and begins a new one, except directly after an exponent marker, so `10-5`
/// reads as `10 -5` but `1e-5` is a single number.
///
pub fn read_numbers(text: &str, target: &mut Vec<f64>) -> Result<(), PathError> {
    let mut number_start    = None;
    let mut last_chr        = ' ';

    for (idx, chr) in text.char_indices() {
        let is_number_chr = chr.is_ascii_digit()
            || chr == '.'
            || is_exponent(chr)
            || (is_sign(chr) && is_exponent(last_chr));

        if !is_number_chr {
            if let Some(start) = number_start {
                read_number_run(&text[start..idx], target)?;
            }

            number_start = if is_sign(chr) { Some(idx) } else { None };
        } else if number_start.is_none() {
            number_start = Some(idx);
        }

        last_chr = chr;
    }

    if let Some(start) = number_start {
        read_number_run(&text[start..], target)?;
    }

    Ok(())
}

///
/// Returns the numbers found in a piece of argument text
///
pub fn parse_numbers(text: &str) -> Result<Vec<f64>, PathError> {
    let mut numbers = vec![];
    read_numbers(text, &mut numbers)?;

    Ok(numbers)
}
