use std::fmt::{Display, Formatter};
use std::os::unix::fs::MetadataExt;
use std::path::Path;
use predicates::prelude::*;
use predicates::reflection::{Case, Parameter, PredicateReflection, Product};

/// Permission bits of a file: all of `required` set, none of `prohibited`.
#[derive(Clone, Debug)]
pub struct FileModePredicate {
    required: u32,
    prohibited: u32,
}

pub fn file_mode(
    required: u32,
    prohibited: u32,
) -> FileModePredicate {
    FileModePredicate {
        required,
        prohibited,
    }
}

impl FileModePredicate {
    fn mode_of(&self, path: &Path) -> std::io::Result<u32> {
        Ok(path.metadata()?.mode() & 0o7777)
    }

    fn matches(&self, mode: u32) -> bool {
        mode & self.required == self.required && mode & self.prohibited == 0
    }
}

impl Predicate<Path> for FileModePredicate {
    fn eval(&self, variable: &Path) -> bool {
        self.mode_of(variable).is_ok_and(|mode| self.matches(mode))
    }

    fn find_case<'a>(&'a self, expected: bool, variable: &Path) -> Option<Case<'a>> {
        let case = match self.mode_of(variable) {
            Ok(mode) => Case::new(Some(self), self.matches(mode))
                .add_product(Product::new("mode", format!("{mode:#05o}"))),
            Err(e) => Case::new(Some(self), false)
                .add_product(Product::new("error", e)),
        };
        (case.result() == expected).then_some(case)
    }
}

impl PredicateReflection for FileModePredicate {
    fn parameters<'a>(&'a self) -> Box<dyn Iterator<Item=Parameter<'a>> + 'a> {
        Box::new(
            [
                Parameter::new("required", &self.required),
                Parameter::new("prohibited", &self.prohibited),
            ].into_iter()
        )
    }
}

impl Display for FileModePredicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "mode(required={:#05o}, prohibited={:#05o})",
            self.required,
            self.prohibited,
        )
    }
}
