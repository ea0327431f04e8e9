use crate::{Alphabet, DEFAULT_COLUMNS, TableSet, VariantsConfig, generate};

fn get_variant(name: &str) -> Alphabet {
    let config = VariantsConfig::load_default().unwrap();
    let variant = config.get_variant(name).unwrap();
    variant.to_alphabet().unwrap()
}

#[test]
fn test_base32_forward_table() {
    let tables = TableSet::derive(&get_variant("base32"));
    assert_eq!(tables.forward[0], b'A');
    assert_eq!(tables.forward[25], b'Z');
    assert_eq!(tables.forward[26], b'2');
    assert_eq!(tables.forward[31], b'7');
    // values past the radix wrap back into the alphabet
    assert_eq!(tables.forward[32], b'A');
    assert_eq!(tables.forward[255], b'7');
}

#[test]
fn test_base32_inverse_folds_case() {
    let tables = TableSet::derive(&get_variant("base32"));
    assert_eq!(tables.inverse[b'A' as usize], 0);
    assert_eq!(tables.inverse[b'a' as usize], 0);
    assert_eq!(tables.inverse[b'Z' as usize], 25);
    assert_eq!(tables.inverse[b'z' as usize], 25);
    assert_eq!(tables.inverse[b'2' as usize], 26);
    assert_eq!(tables.inverse[b'7' as usize], 31);
}

#[test]
fn test_base64_forward_table() {
    let tables = TableSet::derive(&get_variant("base64"));
    assert_eq!(tables.forward[0], b',');
    assert_eq!(tables.forward[1], b'-');
    assert_eq!(tables.forward[2], b'0');
    assert_eq!(tables.forward[63], b'z');
    assert_eq!(tables.forward[64], b',');
}

#[test]
fn test_base64_inverse_preserves_case() {
    let tables = TableSet::derive(&get_variant("base64"));
    assert_eq!(tables.inverse[b',' as usize], 0);
    assert_eq!(tables.inverse[b'A' as usize], 10);
    assert_eq!(tables.inverse[b'a' as usize], 36);
    assert_eq!(tables.inverse[b'z' as usize], 63);
}

#[test]
fn test_space_is_unmapped_in_both_variants() {
    for name in ["base32", "base64"] {
        let tables = TableSet::derive(&get_variant(name));
        assert_eq!(tables.inverse[b' ' as usize], 0);
    }
}

#[test]
fn test_forward_matches_modulo_for_builtins() {
    for name in ["base32", "base64"] {
        let alphabet = get_variant(name);
        let tables = TableSet::derive(&alphabet);
        for value in 0..crate::TABLE_LEN {
            let expected = alphabet.char_for((value % alphabet.radix()) as u8) as u8;
            assert_eq!(tables.forward[value], expected);
        }
    }
}

#[test]
fn test_roundtrip_for_builtins() {
    for name in ["base32", "base64"] {
        let tables = TableSet::derive(&get_variant(name));
        let radix = get_variant(name).radix();
        for position in 0..radix {
            let encoded = tables.forward[position];
            assert_eq!(tables.inverse[encoded as usize], position as u8);
        }
    }
}

#[test]
fn test_nonmembers_collapse_to_zero_for_builtins() {
    for name in ["base32", "base64"] {
        let alphabet = get_variant(name);
        let tables = TableSet::derive(&alphabet);
        for byte in 0..crate::TABLE_LEN {
            if !alphabet.contains_byte(byte as u8) {
                assert_eq!(tables.inverse[byte], 0);
            }
        }
    }
}

#[test]
fn test_generate_base32_shape() {
    let output = generate("base32", &get_variant("base32"), DEFAULT_COLUMNS);

    assert!(output.contains("static unsigned char binary_to_ascii_base32_table[] = {"));
    assert!(output.contains("static unsigned char ascii_to_binary_base32_table[] = {"));

    // two declarations: header + 32 element lines + closing brace each
    assert_eq!(output.lines().count(), 68);
    // 255 separators per table
    assert_eq!(output.matches(',').count(), 510);
}

#[test]
fn test_generate_base64_first_line() {
    let output = generate("base64", &get_variant("base64"), DEFAULT_COLUMNS);
    let second_line = output.lines().nth(1).unwrap();
    assert_eq!(
        second_line,
        "\t',' , \t'-' , \t'0' , \t'1' , \t'2' , \t'3' , \t'4' , \t'5' ,"
    );
}
