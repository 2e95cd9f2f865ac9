//! Configuration and genome serialization through serde.

use genalg_codec::{BitMapping, Chromosome, CodecConfig, VectorCodec};

#[test]
fn test_codec_serialization() {
    for mapping in [BitMapping::Natural, BitMapping::Gray] {
        let codec = VectorCodec::new(8, -100.0, 100.0, mapping).unwrap();
        let json = serde_json::to_string(&codec).unwrap();
        let received: VectorCodec = serde_json::from_str(&json).unwrap();
        assert_eq!(received, codec);

        // A deserialized codec decodes what the original encoded
        let chr = codec.encode(&[1.0, -2.0, 3.0]);
        assert_eq!(
            received.decode(&chr, 3).unwrap(),
            codec.decode(&chr, 3).unwrap()
        );
    }
}

#[test]
fn test_mapping_names() {
    assert_eq!(serde_json::to_string(&BitMapping::Gray).unwrap(), "\"gray\"");
    assert_eq!(
        serde_json::from_str::<BitMapping>("\"natural\"").unwrap(),
        BitMapping::Natural
    );
}

#[test]
fn test_config_json_shape() {
    let config = CodecConfig::new(12, 0.0, 1.5).unwrap();
    let value = serde_json::to_value(config).unwrap();
    assert_eq!(value["bits_per_value"], 12);
    assert_eq!(value["lower_bound"], 0.0);
    assert_eq!(value["upper_bound"], 1.5);
}

#[test]
fn test_invalid_config_rejected_on_deserialize() {
    let bad_bits = r#"{"bits_per_value": 0, "lower_bound": 0.0, "upper_bound": 1.0}"#;
    assert!(serde_json::from_str::<CodecConfig>(bad_bits).is_err());

    let bad_bounds = r#"{"bits_per_value": 8, "lower_bound": 2.0, "upper_bound": 1.0}"#;
    assert!(serde_json::from_str::<CodecConfig>(bad_bounds).is_err());

    let bad_codec = r#"{"config": {"bits_per_value": 64, "lower_bound": 0.0, "upper_bound": 1.0}, "mapping": "gray"}"#;
    assert!(serde_json::from_str::<VectorCodec>(bad_codec).is_err());
}

#[test]
fn test_chromosome_is_raw_bytes() {
    let chr = Chromosome::from_bytes(vec![0, 127, 255]);
    let json = serde_json::to_string(&chr).unwrap();
    assert_eq!(json, "[0,127,255]");

    let received: Chromosome = serde_json::from_str(&json).unwrap();
    assert_eq!(received, chr);
}
