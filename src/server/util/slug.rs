/// Builds the URL slug of a post title.
///
/// Accented latin letters are folded to ASCII, anything that is not a word character,
/// whitespace or `-` is dropped, the result is lowercased, whitespace runs become `-`
/// and leading or trailing dashes are trimmed.
pub fn slugify(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(fold)
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .trim_matches('-')
        .to_string()
}

fn fold(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' | 'ã' => 'a',
        'Á' | 'À' | 'Ä' | 'Â' | 'Ã' => 'A',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'É' | 'È' | 'Ë' | 'Ê' => 'E',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'Í' | 'Ì' | 'Ï' | 'Î' => 'I',
        'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
        'Ó' | 'Ò' | 'Ö' | 'Ô' | 'Õ' => 'O',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'Ú' | 'Ù' | 'Ü' | 'Û' => 'U',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ç' => 'c',
        'Ç' => 'C',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_and_joins_words() {
        assert_eq!(slugify("Rodada a Guatapé  2026"), "rodada-a-guatape-2026");
    }

    #[test]
    fn drops_punctuation_and_trims_dashes() {
        assert_eq!(slugify("  ¡Nueva ruta! -"), "nueva-ruta");
        assert_eq!(slugify("Año nuevo, moto nueva"), "ano-nuevo-moto-nueva");
    }
}
