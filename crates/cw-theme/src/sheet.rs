//! Structured stylesheet: rules and declarations assembled, then rendered.
//!
//! Generators never concatenate CSS text directly. They push [`Rule`]s (and
//! the occasional comment or `@import`) into a [`StyleSheet`], and the sheet
//! is rendered once at the end. Rendering is deterministic: items appear in
//! insertion order, declarations in insertion order, four-space indentation.

use std::fmt;

// ---------------------------------------------------------------------------
// Declaration
// ---------------------------------------------------------------------------

/// One `property: value;` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

impl Declaration {
    #[must_use]
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }

    /// A declaration carrying `!important`.
    #[must_use]
    pub fn important(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            important: true,
            ..Self::new(property, value)
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)?;
        if self.important {
            f.write_str(" !important")?;
        }
        f.write_str(";")
    }
}

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// A selector list and its declaration block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selectors: Vec<String>,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    /// Start a rule for one selector or a selector list.
    #[must_use]
    pub fn new<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selectors: selectors.into_iter().map(Into::into).collect(),
            declarations: Vec::new(),
        }
    }

    #[must_use]
    pub fn decl(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration::new(property, value));
        self
    }

    #[must_use]
    pub fn important(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration::important(property, value));
        self
    }

    /// Append prebuilt declarations.
    #[must_use]
    pub fn with(mut self, declarations: impl IntoIterator<Item = Declaration>) -> Self {
        self.declarations.extend(declarations);
        self
    }

    /// Look up the value of the first declaration of `property`.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selectors.join(",\n"))?;
        f.write_str(" {\n")?;
        for decl in &self.declarations {
            writeln!(f, "    {decl}")?;
        }
        f.write_str("}")
    }
}

// ---------------------------------------------------------------------------
// StyleSheet
// ---------------------------------------------------------------------------

/// A top-level stylesheet item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// Preformatted comment text, including its delimiters.
    Comment(String),
    /// `@import url(<url>);`
    Import(String),
    Rule(Rule),
    /// A named group of rules, delimited by `/*Name*/` and `/*End Name*/`
    /// markers and set off by a blank line.
    Section { name: String, rules: Vec<Rule> },
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comment(text) => f.write_str(text),
            Self::Import(url) => write!(f, "@import url({url});"),
            Self::Rule(rule) => write!(f, "{rule}"),
            Self::Section { name, rules } => {
                writeln!(f, "\n/*{name}*/")?;
                for (i, rule) in rules.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n\n")?;
                    }
                    write!(f, "{rule}")?;
                }
                write!(f, "\n/*End {name}*/")
            }
        }
    }
}

/// An ordered list of stylesheet items.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleSheet {
    items: Vec<Item>,
}

impl StyleSheet {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn comment(&mut self, text: impl Into<String>) -> &mut Self {
        self.items.push(Item::Comment(text.into()));
        self
    }

    pub fn import(&mut self, url: impl Into<String>) -> &mut Self {
        self.items.push(Item::Import(url.into()));
        self
    }

    pub fn rule(&mut self, rule: Rule) -> &mut Self {
        self.items.push(Item::Rule(rule));
        self
    }

    /// Append a named section. Empty sections are dropped.
    pub fn section(&mut self, name: impl Into<String>, rules: Vec<Rule>) -> &mut Self {
        if !rules.is_empty() {
            self.items.push(Item::Section {
                name: name.into(),
                rules,
            });
        }
        self
    }

    /// Move every item of `other` to the end of this sheet.
    pub fn append(&mut self, other: Self) -> &mut Self {
        self.items.extend(other.items);
        self
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All top-level rules and section rules, in order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.items.iter().flat_map(|item| match item {
            Item::Rule(rule) => std::slice::from_ref(rule),
            Item::Section { rules, .. } => rules.as_slice(),
            Item::Comment(_) | Item::Import(_) => &[][..],
        })
    }

    /// Names of the sections present, in order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            Item::Section { name, .. } => Some(name.as_str()),
            _ => None,
        })
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rule_renders_selectors_one_per_line() {
        let rule = Rule::new([".a", ".b"])
            .decl("--x", "1")
            .important("--y", "black");
        assert_eq!(
            rule.to_string(),
            ".a,\n.b {\n    --x: 1;\n    --y: black !important;\n}"
        );
    }

    #[test]
    fn section_is_set_off_by_blank_line() {
        let mut sheet = StyleSheet::new();
        sheet
            .rule(Rule::new([":root"]).decl("--a", "1"))
            .section("Accent", vec![
                Rule::new([".x"]).decl("color", "black"),
                Rule::new([".y"]).decl("color", "white"),
            ]);
        assert_eq!(
            sheet.to_string(),
            ":root {\n    --a: 1;\n}\n\n/*Accent*/\n.x {\n    color: black;\n}\n\n.y {\n    color: white;\n}\n/*End Accent*/"
        );
    }

    #[test]
    fn empty_section_is_dropped() {
        let mut sheet = StyleSheet::new();
        sheet.section("Primary", Vec::new());
        assert!(sheet.is_empty());
    }

    #[test]
    fn import_and_comment() {
        let mut sheet = StyleSheet::new();
        sheet.comment("/* hi */").import("//example.com/a.css");
        assert_eq!(sheet.to_string(), "/* hi */\n@import url(//example.com/a.css);");
    }

    #[test]
    fn rules_iterates_into_sections() {
        let mut sheet = StyleSheet::new();
        sheet
            .rule(Rule::new([":root"]).decl("--a", "1"))
            .section("S", vec![Rule::new([".x"]).decl("--b", "2")]);
        let props: Vec<_> = sheet
            .rules()
            .flat_map(|r| r.declarations.iter().map(|d| d.property.as_str()))
            .collect();
        assert_eq!(props, ["--a", "--b"]);
        assert_eq!(sheet.section_names().collect::<Vec<_>>(), ["S"]);
    }
}
