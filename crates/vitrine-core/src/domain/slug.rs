//! Product slug generation.
//!
//! Slugs are derived from the product name plus a random hex suffix so two
//! products with identical names still get distinct, URL-safe slugs. The
//! database column is UNIQUE; a residual collision surfaces as a conflict.

/// Normalizes a product name into a URL-safe slug fragment.
///
/// Lowercases, trims, strips characters outside `[a-z0-9\s-]`, converts
/// space runs to `-`, and collapses `-` runs.
#[must_use]
pub fn sluggify(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let filtered: String = lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    let mut slug = String::with_capacity(filtered.len());
    let mut last_dash = false;
    for c in filtered.chars() {
        let mapped = if c.is_whitespace() { '-' } else { c };
        if mapped == '-' {
            if !last_dash && !slug.is_empty() {
                slug.push('-');
            }
            last_dash = true;
        } else {
            slug.push(mapped);
            last_dash = false;
        }
    }
    slug.trim_end_matches('-').to_string()
}

/// Generates a unique slug for a product name.
///
/// The suffix is 4 random bytes hex-encoded, so identical names produce
/// pairwise-distinct slugs with overwhelming probability.
#[must_use]
pub fn generate_slug(name: &str) -> String {
    format!("{}-pm{:08x}", sluggify(name), rand::random::<u32>())
}
