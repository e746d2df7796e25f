//! SysEx File Loader
//!
//! Splits a captured byte stream into SysEx messages. Each returned
//! message keeps its leading `0xF0` initiator (the decoders match their
//! headers from offset 0) but drops the `0xF7` terminator. Bytes outside
//! a message and unterminated fragments are skipped, so a dump file with
//! interspersed garbage still yields every complete message.

use nom::bytes::complete::{tag, take_while};
use nom::combinator::recognize;
use nom::sequence::pair;
use nom::IResult;

use std::fs;

use crate::constants::{SYSEX_END, SYSEX_START};
use crate::Result;

/// Loads SysEx dump files from disk
pub struct SyxFileLoader;

impl SyxFileLoader {
    /// Read a `.syx` file and split it into messages.
    pub fn load(path: &str) -> Result<Vec<Vec<u8>>> {
        let data = fs::read(path)?;
        Ok(split_messages(&data)
            .into_iter()
            .map(|msg| msg.to_vec())
            .collect())
    }
}

/// One framed message: initiator plus body, terminator consumed but not
/// included in the result.
fn framed_message(input: &[u8]) -> IResult<&[u8], &[u8]> {
    let (input, msg) = recognize(pair(
        tag([SYSEX_START].as_slice()),
        take_while(|byte| byte != SYSEX_END && byte != SYSEX_START),
    ))(input)?;
    let (input, _) = tag([SYSEX_END].as_slice())(input)?;
    Ok((input, msg))
}

/// Split a raw byte stream into complete SysEx messages.
pub fn split_messages(data: &[u8]) -> Vec<&[u8]> {
    let mut messages = Vec::new();
    let mut rest = data;
    while !rest.is_empty() {
        match rest.iter().position(|&byte| byte == SYSEX_START) {
            Some(start) => rest = &rest[start..],
            None => break,
        }
        match framed_message(rest) {
            Ok((remainder, msg)) => {
                messages.push(msg);
                rest = remainder;
            }
            // Unterminated or immediately restarted message: drop the
            // stray initiator and resync
            Err(_) => rest = &rest[1..],
        }
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_single_message() {
        let data = [0xf0, 0x01, 0x02, 0x42, 0xf7];
        let messages = split_messages(&data);
        assert_eq!(messages, vec![&[0xf0, 0x01, 0x02, 0x42][..]]);
    }

    #[test]
    fn test_split_keeps_initiator_drops_terminator() {
        let data = [0xf0, 0x00, 0xf7];
        let messages = split_messages(&data);
        assert_eq!(messages[0][0], 0xf0);
        assert!(!messages[0].contains(&0xf7));
    }

    #[test]
    fn test_split_multiple_messages_with_garbage() {
        let data = [
            0x90, 0x40, 0x7f, // unrelated channel message
            0xf0, 0x01, 0x02, 0xf7, // first
            0x00, 0x00, // padding
            0xf0, 0x00, 0x61, 0x16, 0x01, 0xf7, // second
        ];
        let messages = split_messages(&data);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], &[0xf0, 0x01, 0x02][..]);
        assert_eq!(messages[1], &[0xf0, 0x00, 0x61, 0x16, 0x01][..]);
    }

    #[test]
    fn test_split_skips_unterminated_fragment() {
        let data = [0xf0, 0x01, 0xf0, 0x02, 0xf7];
        let messages = split_messages(&data);
        assert_eq!(messages, vec![&[0xf0, 0x02][..]]);
    }

    #[test]
    fn test_split_no_messages() {
        assert!(split_messages(&[]).is_empty());
        assert!(split_messages(&[0x01, 0x02, 0x03]).is_empty());
        assert!(split_messages(&[0xf0, 0x01, 0x02]).is_empty());
    }
}
