use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};

use crate::{StreamMeta, StringStream};

#[test]
fn probes_reflect_a_read_only_forward_only_stream() {
    let stream = StringStream::new("anything");
    assert!(stream.can_read());
    assert!(!stream.can_seek());
    assert!(!stream.can_write());
}

#[test]
fn unsupported_operations_fail_with_a_distinct_signal() {
    let mut stream = StringStream::new("anything");
    assert_eq!(
        stream.seek(SeekFrom::Start(0)).unwrap_err().kind(),
        io::ErrorKind::Unsupported
    );
    assert_eq!(
        stream.write(b"nope").unwrap_err().kind(),
        io::ErrorKind::Unsupported
    );
    assert_eq!(
        stream.byte_len().unwrap_err().kind(),
        io::ErrorKind::Unsupported
    );
    assert_eq!(
        stream.position().unwrap_err().kind(),
        io::ErrorKind::Unsupported
    );
    assert_eq!(
        stream.set_position(1).unwrap_err().kind(),
        io::ErrorKind::Unsupported
    );
    assert_eq!(
        stream.set_len(1).unwrap_err().kind(),
        io::ErrorKind::Unsupported
    );
}

#[test]
fn failed_operations_do_not_disturb_the_data() {
    let text = "still intact";
    let mut stream = StringStream::new(text);
    let _ = stream.seek(SeekFrom::Current(3));
    let _ = stream.write(b"junk");
    let mut bytes = Vec::new();
    stream.read_to_end(&mut bytes).unwrap();
    assert_eq!(bytes, text.as_bytes());
}

#[test]
fn flush_is_a_successful_no_op() {
    let mut stream = StringStream::new("anything");
    stream.flush().unwrap();
    let mut bytes = Vec::new();
    stream.read_to_end(&mut bytes).unwrap();
    stream.flush().unwrap();
    assert_eq!(bytes, b"anything");
}

#[test]
fn growable_cursor_reports_full_capabilities() {
    let mut cursor = Cursor::new(vec![1u8, 2, 3]);
    assert!(cursor.can_read());
    assert!(cursor.can_seek());
    assert!(cursor.can_write());
    assert_eq!(cursor.byte_len().unwrap(), 3);
    StreamMeta::set_position(&mut cursor, 2).unwrap();
    assert_eq!(StreamMeta::position(&cursor).unwrap(), 2);
    cursor.set_len(5).unwrap();
    assert_eq!(cursor.get_ref(), &[1, 2, 3, 0, 0]);
}

#[test]
fn borrowed_cursor_is_read_only() {
    let data = [9u8, 8, 7];
    let mut cursor = Cursor::new(&data[..]);
    assert!(cursor.can_read());
    assert!(cursor.can_seek());
    assert!(!cursor.can_write());
    assert_eq!(
        cursor.set_len(1).unwrap_err().kind(),
        io::ErrorKind::Unsupported
    );
}

#[test]
fn fixed_cursor_rejects_resizing() {
    let mut cursor = Cursor::new(vec![0u8; 4].into_boxed_slice());
    assert!(cursor.can_write());
    assert_eq!(
        cursor.set_len(8).unwrap_err().kind(),
        io::ErrorKind::Unsupported
    );
}
