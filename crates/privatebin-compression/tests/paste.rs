use serde::{Deserialize, Serialize};

use privatebin_compression::CompressionAlgorithm;

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct PasteSpec {
    cipher: String,
    compression: CompressionAlgorithm,
}

#[test]
fn test_write_paste_document() {
    //given
    let paste = PasteSpec {
        cipher: "aes".into(),
        compression: CompressionAlgorithm::GZIP,
    };

    //when
    let json = serde_json::to_string(&paste).unwrap();

    //then
    assert_eq!(json, r#"{"cipher":"aes","compression":"zlib"}"#);
}

#[test]
fn test_read_paste_document() {
    //given
    let json = r#"{"cipher":"aes","compression":"none"}"#;

    //when
    let paste: PasteSpec = serde_json::from_str(json).unwrap();

    //then
    assert_eq!(
        paste,
        PasteSpec {
            cipher: "aes".into(),
            compression: CompressionAlgorithm::NONE,
        }
    );
}

#[test]
fn test_unset_compression_fails_whole_document() {
    //given
    let paste = PasteSpec {
        cipher: "aes".into(),
        ..Default::default()
    };

    //when
    let result = serde_json::to_string(&paste);

    //then
    let err = result.unwrap_err();
    assert!(err.to_string().contains("tag 0"), "{err}");
}

#[test]
fn test_bad_token_fails_whole_document() {
    //given
    let inputs = [
        r#"{"cipher":"aes","compression":"gzip"}"#,
        r#"{"cipher":"aes","compression":"Zlib"}"#,
        r#"{"cipher":"aes","compression":2}"#,
        r#"{"cipher":"aes","compression":null}"#,
    ];

    for json in inputs {
        //when
        let result = serde_json::from_str::<PasteSpec>(json);

        //then
        assert!(result.is_err(), "accepted {json}");
    }
}
