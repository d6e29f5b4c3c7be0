//! Codec Tests
//!
//! Tests for RESP frame encoding/decoding.

use std::io::Cursor;

use minisentinel::protocol::{encode_command, read_frame, write_command, Frame};
use minisentinel::SentinelError;

fn decode(bytes: &[u8]) -> Frame {
    let mut cursor = Cursor::new(bytes);
    read_frame(&mut cursor).unwrap()
}

// =============================================================================
// Command Encoding Tests
// =============================================================================

#[test]
fn test_encode_ping_wire_format() {
    assert_eq!(encode_command(&["PING"]), b"*1\r\n$4\r\nPING\r\n");
}

#[test]
fn test_encode_empty_command() {
    let empty: [&str; 0] = [];
    assert_eq!(encode_command(&empty), b"*0\r\n");
}

#[test]
fn test_encode_command_with_args() {
    assert_eq!(
        encode_command(&["SENTINEL", "MASTERS"]),
        b"*2\r\n$8\r\nSENTINEL\r\n$7\r\nMASTERS\r\n"
    );
}

#[test]
fn test_encode_length_is_byte_length() {
    // Multi-byte UTF-8: 2 chars, 4 bytes
    let encoded = encode_command(&["éé"]);
    assert_eq!(encoded, "*1\r\n$4\r\néé\r\n".as_bytes());
}

// =============================================================================
// Frame Decoding Tests
// =============================================================================

#[test]
fn test_decode_simple_string() {
    assert_eq!(decode(b"+PONG\r\n"), Frame::simple("PONG"));
}

#[test]
fn test_decode_error() {
    assert_eq!(decode(b"-ERR oops\r\n"), Frame::error("ERR oops"));
}

#[test]
fn test_decode_integer() {
    assert_eq!(decode(b":10\r\n"), Frame::int(10));
    assert_eq!(decode(b":-3\r\n"), Frame::int(-3));
}

#[test]
fn test_decode_bulk_string() {
    assert_eq!(decode(b"$5\r\nhello\r\n"), Frame::bulk(&b"hello"[..]));
}

#[test]
fn test_decode_empty_bulk_string() {
    assert_eq!(decode(b"$0\r\n\r\n"), Frame::bulk(&b""[..]));
}

#[test]
fn test_decode_bulk_with_embedded_crlf() {
    // Payload bytes are arbitrary, including the frame terminator itself
    assert_eq!(decode(b"$7\r\nab\r\ncd\r\n"), Frame::bulk(&b"ab\r\ncd"[..]));
}

#[test]
fn test_decode_nil_bulk_and_nil_array() {
    assert_eq!(decode(b"$-1\r\n"), Frame::null_bulk());
    assert_eq!(decode(b"*-1\r\n"), Frame::null_array());
}

#[test]
fn test_decode_nested_array() {
    let frame = decode(b"*2\r\n*2\r\n:1\r\n:2\r\n$3\r\nfoo\r\n");
    assert_eq!(
        frame,
        Frame::array(vec![
            Frame::from_ints([1, 2]),
            Frame::bulk(&b"foo"[..]),
        ])
    );
}

#[test]
fn test_decode_empty_array() {
    assert_eq!(decode(b"*0\r\n"), Frame::array(vec![]));
}

// =============================================================================
// Exact-Consumption Tests
// =============================================================================

#[test]
fn test_no_over_read_after_frame() {
    // A sentinel byte right after the frame must be untouched
    let mut cursor = Cursor::new(&b"+OK\r\nX"[..]);
    read_frame(&mut cursor).unwrap();
    assert_eq!(cursor.position(), 5);
}

#[test]
fn test_no_over_read_after_nil_frames() {
    // Nil forms consume nothing beyond their own line
    let mut cursor = Cursor::new(&b"$-1\r\nX"[..]);
    read_frame(&mut cursor).unwrap();
    assert_eq!(cursor.position(), 5);

    let mut cursor = Cursor::new(&b"*-1\r\nX"[..]);
    read_frame(&mut cursor).unwrap();
    assert_eq!(cursor.position(), 5);
}

#[test]
fn test_back_to_back_frames() {
    let mut cursor = Cursor::new(&b"+PONG\r\n:42\r\n$2\r\nhi\r\n"[..]);
    assert_eq!(read_frame(&mut cursor).unwrap(), Frame::simple("PONG"));
    assert_eq!(read_frame(&mut cursor).unwrap(), Frame::int(42));
    assert_eq!(read_frame(&mut cursor).unwrap(), Frame::bulk(&b"hi"[..]));
}

// =============================================================================
// Raw Re-Encoding Tests
// =============================================================================

#[test]
fn test_reencode_is_byte_exact() {
    // Decoded frames re-render their exact wire form, so they can be
    // forwarded raw.
    let wires: [&[u8]; 7] = [
        b"+OK\r\n",
        b"-ERR nope\r\n",
        b":10\r\n",
        b"$6\r\nfoobar\r\n",
        b"$-1\r\n",
        b"*-1\r\n",
        b"*2\r\n$4\r\nPING\r\n*1\r\n:7\r\n",
    ];

    for wire in wires {
        assert_eq!(decode(wire).to_bytes(), wire);
    }
}

// =============================================================================
// Decomposition Tests
// =============================================================================

#[test]
fn test_roundtrip_command_through_into_strings() {
    let commands: Vec<Vec<&str>> = vec![
        vec!["PING"],
        vec!["SENTINEL", "MASTERS"],
        vec!["SET", "key with spaces", ""],
        vec![],
    ];

    for command in commands {
        let mut buf = Vec::new();
        write_command(&mut buf, &command).unwrap();

        let mut cursor = Cursor::new(buf);
        let decoded = read_frame(&mut cursor).unwrap().into_strings().unwrap();
        assert_eq!(decoded, command);
    }
}

#[test]
fn test_bulk_roundtrip_arbitrary_bytes() {
    let payloads: Vec<Vec<u8>> = vec![
        vec![],
        b"plain".to_vec(),
        b"embedded\r\nterminator".to_vec(),
        (0..=255).collect(),
    ];

    for payload in payloads {
        let wire = Frame::bulk(payload.clone()).to_bytes();
        let decoded = decode(&wire).bulk_bytes().unwrap();
        assert_eq!(decoded, payload);
    }
}

#[test]
fn test_into_strings_rejects_non_array() {
    let result = decode(b"+PONG\r\n").into_strings();
    assert!(matches!(
        result,
        Err(SentinelError::UnexpectedType { expected: "array", .. })
    ));
}

#[test]
fn test_bulk_bytes_rejects_wrong_kind() {
    let result = decode(b":5\r\n").bulk_bytes();
    assert!(matches!(
        result,
        Err(SentinelError::UnexpectedType { expected: "bulk string", .. })
    ));
}

#[test]
fn test_bulk_bytes_rejects_nil() {
    let result = decode(b"$-1\r\n").bulk_bytes();
    assert!(matches!(result, Err(SentinelError::UnexpectedType { .. })));
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[test]
fn test_unknown_tag_is_protocol_error() {
    let mut cursor = Cursor::new(&b"?weird\r\n"[..]);
    assert!(matches!(
        read_frame(&mut cursor),
        Err(SentinelError::Protocol(_))
    ));
}

#[test]
fn test_short_line_is_protocol_error() {
    // A bare LF line is below the tag + CRLF minimum
    let mut cursor = Cursor::new(&b"\n"[..]);
    assert!(matches!(
        read_frame(&mut cursor),
        Err(SentinelError::Protocol(_))
    ));
}

#[test]
fn test_missing_crlf_is_protocol_error() {
    let mut cursor = Cursor::new(&b"+OK\n"[..]);
    assert!(matches!(
        read_frame(&mut cursor),
        Err(SentinelError::Protocol(_))
    ));
}

#[test]
fn test_bad_length_is_protocol_error() {
    let mut cursor = Cursor::new(&b"$abc\r\n"[..]);
    assert!(matches!(
        read_frame(&mut cursor),
        Err(SentinelError::Protocol(_))
    ));
}

#[test]
fn test_bad_integer_is_protocol_error() {
    let mut cursor = Cursor::new(&b":ten\r\n"[..]);
    assert!(matches!(
        read_frame(&mut cursor),
        Err(SentinelError::Protocol(_))
    ));
}

#[test]
fn test_truncated_bulk_is_io_error() {
    // Header promises 10 bytes, stream ends early
    let mut cursor = Cursor::new(&b"$10\r\nshort\r\n"[..]);
    assert!(matches!(read_frame(&mut cursor), Err(SentinelError::Io(_))));
}

#[test]
fn test_eof_at_frame_boundary_is_unexpected_eof() {
    let mut cursor = Cursor::new(&b""[..]);
    match read_frame(&mut cursor) {
        Err(SentinelError::Io(e)) => {
            assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof)
        }
        other => panic!("expected EOF error, got {:?}", other),
    }
}
