//! LaTeX-ish math and Markdown decoration to plain display text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// A named normalization stage.
pub struct Stage {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

/// The normalization pipeline, applied top to bottom.
pub const STAGES: &[Stage] = &[
    Stage {
        name: "headings",
        apply: strip_headings,
    },
    Stage {
        name: "fractions",
        apply: convert_fractions,
    },
    Stage {
        name: "symbols",
        apply: substitute_symbols,
    },
    Stage {
        name: "scripts",
        apply: simplify_scripts,
    },
    Stage {
        name: "markdown",
        apply: strip_markdown,
    },
    Stage {
        name: "whitespace",
        apply: collapse_whitespace,
    },
];

/// LaTeX command tokens and the glyphs that replace them.
pub const SYMBOLS: &[(&str, &str)] = &[
    (r"\times", "×"),
    (r"\div", "÷"),
    (r"\pm", "±"),
    (r"\approx", "≈"),
    (r"\neq", "≠"),
    (r"\leq", "≤"),
    (r"\geq", "≥"),
    (r"\infty", "∞"),
    (r"\sqrt", "√"),
    (r"\pi", "π"),
    (r"\alpha", "α"),
    (r"\beta", "β"),
    (r"\gamma", "γ"),
    (r"\theta", "θ"),
];

/// Convert a text fragment into plain readable text. Never fails; markup it
/// does not understand is left as literal text.
pub fn normalize(text: &str) -> String {
    STAGES
        .iter()
        .fold(text.to_string(), |acc, stage| (stage.apply)(&acc))
}

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#+[ \t]+").expect("valid heading regex"));
// Each argument may hold one level of nested braces, as in `\frac{x^{2}}{4}`.
static FRACTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\?\bfrac\{((?:[^{}]|\{[^{}]*\})+)\}\{((?:[^{}]|\{[^{}]*\})+)\}")
        .expect("valid fraction regex")
});
static SUPERSCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\^\{([^{}]+)\}").expect("valid superscript regex"));
static SUBSCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_\{([^{}]+)\}").expect("valid subscript regex"));
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\([^)]*\)").expect("valid image regex"));
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("valid link regex"));
static BLOCK_MATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\$([^$]+)\$\$").expect("valid block math regex"));
static INLINE_MATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([^$]+)\$").expect("valid inline math regex"));
static BOLD_STAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold star regex"));
static BOLD_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.+?)__").expect("valid bold underscore regex"));
static ITALIC_STAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(?:([^*\s](?:[^*\n]*[^*\s])?))?\*").expect("valid italic star regex"));
static ITALIC_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(.+?)_").expect("valid italic underscore regex"));
static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`(.*?)`").expect("valid code regex"));
static LIST_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-*+•][ \t]+").expect("valid list marker regex"));
static BRACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\^_]?)\{([^{}]+)\}").expect("valid brace regex"));
static BLANK_LINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n").expect("valid blank lines regex"));

fn strip_headings(text: &str) -> String {
    HEADING_RE.replace_all(text, "").into_owned()
}

fn convert_fractions(text: &str) -> String {
    FRACTION_RE
        .replace_all(text, |caps: &Captures| render_fraction(&caps[1], &caps[2]))
        .into_owned()
}

/// `n/d` reduced by the gcd, or the bare numerator when the denominator reduces to 1.
/// Non-integer arguments and zero denominators come back as `num/den`, unreduced,
/// with any fraction inside an argument converted first.
fn render_fraction(numerator: &str, denominator: &str) -> String {
    let numerator = convert_fractions(numerator);
    let denominator = convert_fractions(denominator);
    match (numerator.trim().parse::<i64>(), denominator.trim().parse::<i64>()) {
        (Ok(num), Ok(den)) if den != 0 => {
            let divisor = gcd(num, den);
            let num = i128::from(num) / divisor;
            let den = i128::from(den) / divisor;
            if den == 1 {
                num.to_string()
            } else {
                format!("{}/{}", num, den)
            }
        }
        _ => format!("{}/{}", numerator, denominator),
    }
}

/// Euclid on absolute values. Widened so `i64::MIN` cannot overflow.
fn gcd(a: i64, b: i64) -> i128 {
    let (mut a, mut b) = (i128::from(a).abs(), i128::from(b).abs());
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

fn substitute_symbols(text: &str) -> String {
    SYMBOLS
        .iter()
        .fold(text.to_string(), |acc, (token, glyph)| acc.replace(token, glyph))
}

fn simplify_scripts(text: &str) -> String {
    let text = SUPERSCRIPT_RE.replace_all(text, |caps: &Captures| unwrap_short(caps, '^'));
    SUBSCRIPT_RE
        .replace_all(&text, |caps: &Captures| unwrap_short(caps, '_'))
        .into_owned()
}

/// `^{ab}` becomes `^ab`; anything longer keeps its braces.
fn unwrap_short(caps: &Captures, marker: char) -> String {
    let inner = &caps[1];
    if inner.chars().count() <= 2 {
        format!("{}{}", marker, inner)
    } else {
        caps[0].to_string()
    }
}

/// Math-only handling reused for the inside of `$...$` spans.
fn normalize_math(text: &str) -> String {
    simplify_scripts(&substitute_symbols(&convert_fractions(text)))
}

fn strip_markdown(text: &str) -> String {
    let text = IMAGE_RE.replace_all(text, "");
    let text = LINK_RE.replace_all(&text, "${1}");
    let text = BLOCK_MATH_RE.replace_all(&text, |caps: &Captures| normalize_math(&caps[1]));
    let text = INLINE_MATH_RE.replace_all(&text, |caps: &Captures| normalize_math(&caps[1]));
    let text = strip_emphasis(&text);
    let text = CODE_RE.replace_all(&text, "${1}");
    let text = LIST_MARKER_RE.replace_all(&text, "");
    BRACE_RE
        .replace_all(&text, |caps: &Captures| {
            if caps[1].is_empty() {
                caps[2].to_string()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Bold then italic, both `*` and `_` flavours. A lone `*` between spaces is
/// multiplication and is left alone.
fn strip_emphasis(text: &str) -> String {
    let text = BOLD_STAR_RE.replace_all(text, "${1}");
    let text = BOLD_UNDERSCORE_RE.replace_all(&text, "${1}");
    let text = ITALIC_STAR_RE.replace_all(&text, "${1}");
    ITALIC_UNDERSCORE_RE
        .replace_all(&text, "${1}")
        .into_owned()
}

/// `**x**` and `*x*` only. Underscores are left alone so subscripts and
/// identifiers like `a_1` survive.
pub(super) fn strip_star_emphasis(text: &str) -> String {
    let text = BOLD_STAR_RE.replace_all(text, "${1}");
    ITALIC_STAR_RE.replace_all(&text, "${1}").into_owned()
}

fn collapse_whitespace(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    BLANK_LINES_RE
        .replace_all(&text, "\n\n")
        .trim()
        .to_string()
}
