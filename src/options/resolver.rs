//! Precedence rules for merging parameter blocks.
//!
//! Rules are applied in order to every non-blank line, user options first and
//! extension parameters last:
//!
//! 1. A key that was already accepted is a duplicate; first occurrence wins.
//! 2. `onLoad` is accepted unless strict checking is on and the callback is
//!    not mentioned in the code. A dropped `onLoad` does not claim the key, so
//!    a later `onLoad` line gets its own chance.
//! 3. With a non-custom framework, enforced keys are claimed and dropped.
//! 4. Anything else is kept.

use std::collections::HashMap;

use super::{ParameterLine, ParameterOrigin, ResolutionContext};
use crate::issues::{
    Diagnostic, DuplicateParameterIssue, EnforcedDefaultIssue, ParameterContext,
    UnusedOnLoadIssue,
};

/// Parameter naming a callback that must exist in the user's code.
pub const ON_LOAD_KEY: &str = "onLoad";

/// Output of a resolve pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Surviving parameters, one `key: value` per line, newline terminated.
    pub text: String,
    /// Surviving parameters in visitation order.
    pub parameters: Vec<ParameterLine>,
    /// One entry per dropped line.
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }
}

/// Resolve `raw_options` followed by `extension_options`.
///
/// `strict_on_load` enables the onLoad reference check. Never fails: malformed
/// lines degrade to a key with an empty value.
///
/// ```
/// use apiconsole::options::{ResolutionContext, resolve};
///
/// let ctx = ResolutionContext::new("function foo(){}");
/// let resolution = resolve("a:1\na:2\nonLoad: foo", None, &ctx, true);
/// assert_eq!(resolution.text, "a: 1\nonLoad: foo\n");
/// assert_eq!(resolution.diagnostics.len(), 1);
/// ```
pub fn resolve(
    raw_options: &str,
    extension_options: Option<&str>,
    ctx: &ResolutionContext,
    strict_on_load: bool,
) -> Resolution {
    let mut resolver = Resolver::new(ctx, strict_on_load);

    resolver.visit_block(ParameterOrigin::Options, raw_options);
    if let Some(extension) = extension_options {
        resolver.visit_block(ParameterOrigin::Extension, extension);
    }

    resolver.finish()
}

struct Resolver<'a> {
    ctx: &'a ResolutionContext,
    strict_on_load: bool,
    /// Claimed keys and the value that claimed them.
    accepted: HashMap<String, String>,
    resolution: Resolution,
}

impl<'a> Resolver<'a> {
    fn new(ctx: &'a ResolutionContext, strict_on_load: bool) -> Self {
        Self {
            ctx,
            strict_on_load,
            accepted: HashMap::new(),
            resolution: Resolution::default(),
        }
    }

    fn visit_block(&mut self, origin: ParameterOrigin, block: &str) {
        for (index, source_line) in block.lines().enumerate() {
            let Some(parameter) = ParameterLine::parse(source_line) else {
                continue;
            };
            let context = ParameterContext::new(origin, index + 1, source_line, parameter);
            self.visit(context);
        }
    }

    fn visit(&mut self, context: ParameterContext) {
        let key = context.key();

        if let Some(kept_value) = self.accepted.get(key) {
            let kept_value = kept_value.clone();
            self.drop_line(DuplicateParameterIssue {
                context,
                kept_value,
            });
            return;
        }

        if key == ON_LOAD_KEY {
            if self.strict_on_load && !self.ctx.on_load_defined(context.value()) {
                self.drop_line(UnusedOnLoadIssue { context });
                return;
            }
            self.keep(context);
            return;
        }

        if let Some(enforced_value) = self.ctx.enforced_value(key) {
            self.accepted
                .insert(key.to_string(), enforced_value.to_string());
            self.drop_line(EnforcedDefaultIssue {
                context,
                enforced_value,
            });
            return;
        }

        self.keep(context);
    }

    fn keep(&mut self, context: ParameterContext) {
        let parameter = context.parameter;
        self.accepted
            .insert(parameter.key.clone(), parameter.value.clone());
        self.resolution.text.push_str(&parameter.to_string());
        self.resolution.text.push('\n');
        self.resolution.parameters.push(parameter);
    }

    fn drop_line(&mut self, issue: impl Into<Diagnostic>) {
        self.resolution.diagnostics.push(issue.into());
    }

    fn finish(self) -> Resolution {
        self.resolution
    }
}
