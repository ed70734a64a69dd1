use iri_pct::{normalize, normalize_range, Component};

const ALL: &[Component] = &[
    Component::Scheme,
    Component::Userinfo,
    Component::Host,
    Component::Port,
    Component::Path,
    Component::Query,
    Component::Fragment,
    Component::None,
];

fn check_idempotent(s: &str, component: Component) {
    let once = normalize(s, component);
    assert_eq!(normalize(&once, component), once, "input: {s:?}");
}

#[test]
fn safe_ascii_round_trip() {
    for &component in ALL {
        assert_eq!(normalize("", component), "");
        assert_eq!(
            normalize("ABCXYZabcxyz0189-._~", component),
            "ABCXYZabcxyz0189-._~"
        );
        // Unencoded ASCII is copied through unchanged, delimiters included.
        assert_eq!(normalize("/a?b#c d\\e", component), "/a?b#c d\\e");
    }
}

#[test]
fn unreserved_ascii_octets_decode() {
    assert_eq!(normalize("%41%7A%7E", Component::Path), "Az~");
    assert_eq!(normalize("%61%2E%62", Component::Host), "a.b");
    assert_eq!(normalize("a%20b", Component::Query), "a b");
}

#[test]
fn reserved_stays_escaped() {
    assert_eq!(normalize("%2F", Component::Path), "%2F");
    assert_eq!(normalize("%3F", Component::Path), "%3F");
    assert_eq!(normalize("%26", Component::Query), "%26");
    assert_eq!(normalize("%3A", Component::Scheme), "%3A");
    // Outside any component, sub-delims are still unsafe to unescape.
    assert_eq!(normalize("%2F%26%3D", Component::None), "%2F%26%3D");
}

#[test]
fn unsafe_octets_stay_escaped() {
    for s in ["%00", "%1F", "%7F", "%9F", "%81", "%25", "%5C"] {
        assert_eq!(normalize(s, Component::None), s);
    }
    // The original hex-digit case of a kept octet is preserved.
    assert_eq!(normalize("%2f", Component::Path), "%2f");
    assert_eq!(normalize("%7f", Component::None), "%7f");
}

#[test]
fn malformed_escape_passthrough() {
    assert_eq!(normalize("%", Component::Path), "%");
    assert_eq!(normalize("abc%", Component::Path), "abc%");
    assert_eq!(normalize("%zz", Component::Path), "%zz");
    assert_eq!(normalize("%a", Component::Path), "%a");
    assert_eq!(normalize("%%41", Component::Path), "%%41");
    assert_eq!(normalize("100%", Component::Query), "100%");
}

#[test]
fn multibyte_octets_decode() {
    assert_eq!(normalize("%C2%A0", Component::None), "\u{a0}");
    assert_eq!(normalize("%E2%82%AC", Component::Path), "\u{20ac}");
    assert_eq!(normalize("caf%C3%A9", Component::Path), "café");
    assert_eq!(normalize("%F0%9F%98%83", Component::Path), "\u{1f603}");
}

#[test]
fn multibyte_octets_malformed() {
    // A whole run of escaped octets that is not valid UTF-8 is
    // copied verbatim, original case included.
    assert_eq!(normalize("%ED%A0%80", Component::Path), "%ED%A0%80");
    assert_eq!(normalize("%ed%a0%80", Component::Path), "%ed%a0%80");
    assert_eq!(normalize("%E2%82", Component::Path), "%E2%82");
    assert_eq!(normalize("%C0%80", Component::Path), "%C0%80");
    // CESU-8 surrogate halves never decode.
    assert_eq!(
        normalize("%ED%A0%BD%ED%B8%83", Component::Path),
        "%ED%A0%BD%ED%B8%83"
    );
}

#[test]
fn multibyte_octets_partial() {
    // Only the bytes the decoder cannot attribute to a character
    // stay escaped.
    assert_eq!(normalize("%C2%A0%FF", Component::None), "\u{a0}%FF");
    assert_eq!(normalize("%FF%C2%A0", Component::None), "%FF\u{a0}");
    // A run broken by an ASCII octet restarts after it.
    assert_eq!(normalize("%C2%41", Component::Path), "%C2A");
    assert_eq!(normalize("%C2%A", Component::Path), "%C2%A");
}

#[test]
fn decoded_char_outside_ranges_reencoded() {
    // U+FFFE is outside the IRI ranges; the run decodes but the
    // character is re-encoded, uppercase.
    assert_eq!(normalize("%ef%bf%be", Component::Path), "%EF%BF%BE");
    assert_eq!(normalize("%EE%80%80", Component::Path), "%EE%80%80");
}

#[test]
fn component_sensitivity() {
    // U+E000 is iprivate: allowed unescaped in the query only.
    assert_eq!(normalize("\u{e000}", Component::Path), "%EE%80%80");
    assert_eq!(normalize("\u{e000}", Component::Query), "\u{e000}");
    assert_eq!(normalize("%EE%80%80", Component::Query), "\u{e000}");
    assert_eq!(normalize("%EE%80%80", Component::Fragment), "%EE%80%80");
}

#[test]
fn raw_text_ranges() {
    assert_eq!(normalize("\u{a0}", Component::None), "\u{a0}");
    assert_eq!(normalize("р-н", Component::Path), "р-н");
    assert_eq!(normalize("真正", Component::Host), "真正");
    // U+0080 is below the first IRI window.
    assert_eq!(normalize("\u{80}", Component::Path), "%C2%80");
    assert_eq!(normalize("\u{fff0}", Component::Path), "%EF%BF%B0");
}

#[test]
fn supplementary_atomicity() {
    // A supplementary character is copied whole or escaped as
    // four adjacent triples.
    assert_eq!(normalize("\u{1f603}", Component::Path), "\u{1f603}");
    assert_eq!(normalize("\u{10ffff}", Component::Path), "%F4%8F%BF%BF");
    assert_eq!(normalize("a\u{10ffff}b", Component::Query), "a%F4%8F%BF%BFb");
    // Plane 15 private use: query only.
    assert_eq!(normalize("\u{f0001}", Component::Query), "\u{f0001}");
    assert_eq!(normalize("\u{f0001}", Component::Path), "%F3%B0%80%81");
    assert_eq!(normalize("%F3%B0%80%81", Component::Query), "\u{f0001}");
}

#[test]
fn idempotence() {
    let inputs = [
        "",
        "plain ascii only",
        "%",
        "%zz",
        "%%41",
        "%2F%2f%41%C2%A0",
        "%C2%A0%FF%C2",
        "%ED%A0%BD%ED%B8%83",
        "%ee%80%80",
        "каф%C3%A9/真正?\u{e000}#\u{1f603}",
        "\u{80}\u{9f}\u{a0}\u{f8ff}\u{10ffff}",
        "%F3%B0%80%81%F4%8F%BF%BF",
        "a%20b%c2%41%e2%82",
    ];
    for s in inputs {
        for &component in ALL {
            check_idempotent(s, component);
        }
    }
}

#[test]
fn ranges() {
    let s = "q=%C2%A0";
    assert_eq!(normalize_range(s, 2..8, Component::Query), "\u{a0}");
    assert_eq!(normalize_range(s, 0..0, Component::Query), "");
    assert_eq!(
        normalize_range(s, 0..s.len(), Component::Query),
        normalize(s, Component::Query)
    );
    // A truncated escape at the end of the span is passed through
    // even if the rest of the string completes it.
    assert_eq!(normalize_range(s, 0..4, Component::Query), "q=%C");
}

#[test]
#[should_panic]
fn range_out_of_bounds() {
    normalize_range("abc", 0..4, Component::Path);
}

#[test]
#[should_panic]
fn range_not_on_char_boundary() {
    normalize_range("é", 0..1, Component::Path);
}
