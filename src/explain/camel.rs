//! camelCase / PascalCase derivation for explainer field ids.
use crate::config::CamelMode;

/// Strip non-alphanumeric characters and re-case the remainder. Lowercases
/// the leading character unless `UpperCamel` is requested. Idempotent
/// idempotent: the output contains no separators left to re-case, so a
/// second pass reproduces it exactly.
pub fn camelize(name: &str, mode: CamelMode) -> String {
    if mode == CamelMode::None {
        return name.to_string();
    }
    let upper_first = mode == CamelMode::UpperCamel;
    let mut out = String::with_capacity(name.len());
    let mut capitalize_next = upper_first;
    let mut seen_first = false;

    for ch in name.chars() {
        if !ch.is_alphanumeric() {
            capitalize_next = true;
            continue;
        }
        if !seen_first {
            out.push(if upper_first { ch.to_ascii_uppercase() } else { ch.to_ascii_lowercase() });
            seen_first = true;
            capitalize_next = false;
            continue;
        }
        if capitalize_next {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
        capitalize_next = false;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idempotent_for_any_fixed_mode() {
        let samples = ["COG Reference", "Sequence ID#2", "already_snake_case", ""];
        for s in samples {
            for mode in [CamelMode::LowerCamel, CamelMode::UpperCamel] {
                let once = camelize(s, mode);
                let twice = camelize(&once, mode);
                assert_eq!(once, twice, "not idempotent for {s:?} in {mode:?}");
            }
        }
    }

    #[test]
    fn lower_camel_lowercases_first_letter() {
        assert_eq!(camelize("COG Reference", CamelMode::LowerCamel), "cOGReference");
    }

    #[test]
    fn upper_camel_uppercases_first_letter() {
        assert_eq!(camelize("cog reference", CamelMode::UpperCamel), "CogReference");
    }
}
