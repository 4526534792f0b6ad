//! Colorway IDs, source files, and applying stored colorways.

use cw_theme::{
    Colorway, ColorwayId, ColorwaySpec, SourceFile, StyleSink, SynthesisOptions, apply_colorway,
    find_preset,
};
use pretty_assertions::assert_eq;

#[test]
fn id_roundtrip() {
    let spec = ColorwaySpec::parse("#5865f2", "#313338", "#2b2d31", "#1e1f22").unwrap();
    let id = ColorwayId::new(spec).with_name("Test").with_preset("default");
    let decoded = ColorwayId::decode(&id.encode().unwrap()).unwrap();
    assert_eq!(decoded.spec, spec);
    assert_eq!(decoded.name.as_deref(), Some("Test"));
    assert_eq!(decoded.preset.as_deref(), Some("default"));
}

#[test]
fn bad_ids_are_rejected_whole() {
    for input in ["", "2335", "not hex at all, but long enough to pass the length check!!!!!!"] {
        assert!(ColorwayId::decode(input).is_err(), "accepted {input:?}");
    }
}

#[derive(Default)]
struct Recorder(Vec<String>);

impl StyleSink for Recorder {
    fn set(&mut self, css: &str) {
        self.0.push(css.to_owned());
    }

    fn remove(&mut self) {
        self.0.clear();
    }
}

#[test]
fn source_file_to_applied_stylesheet() {
    let file = SourceFile::from_json(
        r##"{"colorways": [{
            "name": "Mint",
            "accent": "#3ddc97",
            "primary": "#1f2a25",
            "secondary": "#1a2420",
            "tertiary": "#131b17",
            "author": "someone",
            "authorID": "99",
            "preset": "solana"
        }]}"##,
    )
    .unwrap();
    let mint = &file.colorways[0];
    let preset = mint.preset.as_deref().unwrap();
    assert!(find_preset(preset).is_some());

    let mut sink = Recorder::default();
    let css = apply_colorway(&mut sink, mint, preset, &SynthesisOptions::default()).unwrap();
    assert_eq!(sink.0, [css.full().to_owned()]);
    assert!(css.full().contains("--background-overlay-opacity: 0%;"));

    // The shared ID reproduces the stored record.
    let shared = Colorway::from(ColorwayId::decode(&mint.id().unwrap()).unwrap());
    assert_eq!(shared.name, "Mint");
    assert_eq!(shared.spec().unwrap(), mint.spec().unwrap());
    assert_eq!(shared.preset, mint.preset);
}
