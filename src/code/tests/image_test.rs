use crate::code::{ErrorCode, Image};

#[test]
fn test_little_endian_words() {
    let image = Image::from_bytes(&[0x09, 0x00, 0x00, 0x80]).unwrap();
    assert_eq!(image.words(), &[9, 32768]);
    assert_eq!(image.sanitized(), 0);
}

#[test]
fn test_odd_length_rejected() {
    let error = Image::from_bytes(&[1, 0, 2]).unwrap_err();
    assert!(error.is(ErrorCode::OddLength));
}

#[test]
fn test_oversize_rejected() {
    let bytes = vec![0u8; (1 << 16) + 2];
    let error = Image::from_bytes(&bytes).unwrap_err();
    assert!(error.is(ErrorCode::TooLarge));
}

#[test]
fn test_full_capacity_accepted() {
    let bytes = vec![0u8; 1 << 16];
    let image = Image::from_bytes(&bytes).unwrap();
    assert_eq!(image.words().len(), 1 << 15);
}

#[test]
fn test_out_of_range_words_sanitized() {
    // 32776 and 65535 are meaningless on the wire; 32775 is register 7.
    let image = Image::from_bytes(&[0x08, 0x80, 0xff, 0xff, 0x07, 0x80]).unwrap();
    assert_eq!(image.words(), &[0, 0, 32775]);
    assert_eq!(image.sanitized(), 2);
}

#[test]
fn test_missing_file() {
    let error = Image::from_file("no-such-image.bin").unwrap_err();
    assert!(error.is(ErrorCode::FileUnreadable));
}

#[test]
fn test_from_words_checks_capacity() {
    let words = vec![21u16; (1 << 15) + 1];
    assert!(Image::from_words(&words).unwrap_err().is(ErrorCode::TooLarge));
}
