//! Icon name transforms
//!
//! Icons are named in PascalCase (`SquarePen`) and addressed in kebab-case
//! (`square-pen`) for CSS classes and file names.

/// Convert a Pascal/camel-case name to kebab-case
///
/// A `-` is inserted between an ASCII lowercase letter or digit and a
/// following ASCII uppercase letter; the result is lowercased. Runs of
/// capitals are not split and digits never start a new word:
///
/// ```
/// use lucide_svg::to_kebab_case;
///
/// assert_eq!(to_kebab_case("SquarePen"), "square-pen");
/// assert_eq!(to_kebab_case("Grid3x3"), "grid3x3");
/// assert_eq!(to_kebab_case("ArrowUpAZ"), "arrow-up-az");
/// ```
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if let Some(p) = prev {
                if p.is_ascii_lowercase() || p.is_ascii_digit() {
                    out.push('-');
                }
            }
        }
        out.push(c.to_ascii_lowercase());
        prev = Some(c);
    }
    out
}

/// Convert a kebab/snake-case name to PascalCase
///
/// `square-pen` becomes `SquarePen`; `grid-3x3` becomes `Grid3x3`.
pub fn to_pascal_case(name: &str) -> String {
    name.split(['-', '_', ' '])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Normalise a name for case- and separator-insensitive lookup
///
/// `SquarePen`, `square-pen`, `square_pen` and `squarepen` all map to
/// `squarepen`.
pub fn lookup_key(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Strip the `lucide` prefix and `icon` suffix from a lookup key
///
/// Takes the output of [`lookup_key`], so `LucideCheck`, `lucide-check`
/// and `check-icon` all reduce to `check`. Returns `None` if neither affix
/// is present or nothing would remain.
pub fn strip_export_affixes(key: &str) -> Option<&str> {
    let stripped = key.strip_prefix("lucide").unwrap_or(key);
    let stripped = stripped.strip_suffix("icon").unwrap_or(stripped);
    if stripped.len() == key.len() || stripped.is_empty() {
        None
    } else {
        Some(stripped)
    }
}

/// Levenshtein edit distance between two strings
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut row = vec![0usize; b.len() + 1];
    for i in 1..=a.len() {
        row[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            row[j] = (prev[j] + 1).min(row[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut row);
    }
    prev[b.len()]
}
