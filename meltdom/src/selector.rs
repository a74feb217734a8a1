use std::fmt;

/// A conjunction of attribute tests, the `[name]` / `[name="value"]`
/// subset of CSS attribute selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tests: Vec<AttrTest>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrTest {
    Has(String),
    Equals(String, String),
}

impl Selector {
    /// Match elements carrying attribute `name`, whatever its value.
    pub fn has(name: impl Into<String>) -> Self {
        Self {
            tests: vec![AttrTest::Has(name.into())],
        }
    }

    /// Match elements whose attribute `name` equals `value`.
    pub fn equals(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::default().with(name, value)
    }

    /// Additionally require attribute `name` to be present.
    pub fn and_has(mut self, name: impl Into<String>) -> Self {
        self.tests.push(AttrTest::Has(name.into()));
        self
    }

    /// Additionally require attribute `name` to equal `value`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tests.push(AttrTest::Equals(name.into(), value.into()));
        self
    }

    /// Whether an attribute list satisfies every test. An empty selector
    /// matches everything.
    pub fn matches(&self, attrs: &[(String, String)]) -> bool {
        let lookup = |name: &str| attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v);
        self.tests.iter().all(|test| match test {
            AttrTest::Has(name) => lookup(name).is_some(),
            AttrTest::Equals(name, value) => lookup(name) == Some(value),
        })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for test in &self.tests {
            match test {
                AttrTest::Has(name) => write!(f, "[{name}]")?,
                AttrTest::Equals(name, value) => write!(f, "[{name}=\"{value}\"]")?,
            }
        }
        Ok(())
    }
}
