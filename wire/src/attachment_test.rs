use super::*;

#[test]
fn encode_produces_padded_standard_base64() {
    let a = Attachment::encode("hi.txt", b"hi").expect("encode");
    assert_eq!(a.name, "hi.txt");
    assert_eq!(a.data, "aGk=");
    assert_eq!(a.decoded_len(), 2);
}

#[test]
fn decode_restores_original_bytes() {
    let a = Attachment::encode("bin", &[0, 159, 255, 10]).expect("encode");
    assert_eq!(a.decode().expect("decode"), vec![0, 159, 255, 10]);
}

#[test]
fn decode_rejects_garbage() {
    let a = Attachment { name: "x".to_owned(), data: "not base64!".to_owned() };
    assert!(matches!(a.decode(), Err(AttachmentError::Decode(_))));
}

#[test]
fn check_size_accepts_exact_cap() {
    assert!(check_size("big", MAX_ATTACHMENT_BYTES).is_ok());
}

#[test]
fn check_size_rejects_over_cap_with_name() {
    let err = check_size("huge.zip", MAX_ATTACHMENT_BYTES + 1).expect_err("too large");
    match err {
        AttachmentError::TooLarge { name, size, limit } => {
            assert_eq!(name, "huge.zip");
            assert_eq!(size, MAX_ATTACHMENT_BYTES + 1);
            assert_eq!(limit, MAX_ATTACHMENT_BYTES);
        }
        AttachmentError::Decode(_) => panic!("unexpected decode error"),
    }
}

#[test]
fn remove_at_drops_by_index_and_ignores_out_of_range() {
    let mut files = vec![
        Attachment::encode("a", b"a").expect("a"),
        Attachment::encode("b", b"b").expect("b"),
        Attachment::encode("c", b"c").expect("c"),
    ];
    remove_at(&mut files, 1);
    let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a", "c"]);
    remove_at(&mut files, 9);
    assert_eq!(files.len(), 2);
}
