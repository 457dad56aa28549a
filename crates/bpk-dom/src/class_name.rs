#![forbid(unsafe_code)]

//! Logical-to-scoped class name mapping.
//!
//! Stylesheets are compiled with locally scoped class names, so a component
//! that wants `bpk-tour-popover` must ask the stylesheet module which name it
//! actually received. [`ClassNameResolver`] is that lookup.
//!
//! | Mode       | Output for `bpk-tour-popover`          |
//! |------------|-----------------------------------------|
//! | `identity` | `bpk-tour-popover`                      |
//! | `from_map` | table entry, else `bpk-tour-popover`    |
//! | `scoped`   | `bpk-tour-popover__<5 char hash>`       |
//!
//! All modes are pure: the same input always yields the same output, across
//! runs and processes.

use ahash::AHashMap;

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;
const HASH_ALPHABET: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyz234567";
const HASH_LEN: usize = 5;

#[derive(Debug, Clone)]
enum Mode {
    Identity,
    Table(AHashMap<String, String>),
    Scoped(String),
}

/// Deterministic class name resolver.
#[derive(Debug, Clone)]
pub struct ClassNameResolver {
    mode: Mode,
}

impl Default for ClassNameResolver {
    fn default() -> Self {
        Self::identity()
    }
}

impl ClassNameResolver {
    /// Return logical names unchanged (unscoped stylesheets).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            mode: Mode::Identity,
        }
    }

    /// Use a stylesheet module export table. Unmapped names pass through.
    pub fn from_map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            mode: Mode::Table(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Derive scoped names from `module` the way a css-loader
    /// `[local]__[hash:5]` ident would.
    #[must_use]
    pub fn scoped(module: impl Into<String>) -> Self {
        Self {
            mode: Mode::Scoped(module.into()),
        }
    }

    /// Resolve one logical name.
    #[must_use]
    pub fn resolve(&self, logical: &str) -> String {
        match &self.mode {
            Mode::Identity => logical.to_owned(),
            Mode::Table(table) => table
                .get(logical)
                .cloned()
                .unwrap_or_else(|| logical.to_owned()),
            Mode::Scoped(module) => format!("{logical}__{}", short_hash(module, logical)),
        }
    }

    /// Resolve and join the present entries, skipping `None` and blanks.
    ///
    /// ```
    /// use bpk_dom::ClassNameResolver;
    ///
    /// let cx = ClassNameResolver::identity();
    /// let has_next = false;
    /// let class = cx.class_name(&[Some("button"), has_next.then_some("button--wide")]);
    /// assert_eq!(class, "button");
    /// ```
    #[must_use]
    pub fn class_name(&self, names: &[Option<&str>]) -> String {
        names
            .iter()
            .flatten()
            .filter(|name| !name.trim().is_empty())
            .map(|name| self.resolve(name))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn short_hash(module: &str, local: &str) -> String {
    let mut hash = FNV_OFFSET;
    for byte in module.bytes().chain([0u8]).chain(local.bytes()) {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    (0..HASH_LEN)
        .map(|i| HASH_ALPHABET[((hash >> (i * 5)) & 0x1f) as usize] as char)
        .collect()
}
