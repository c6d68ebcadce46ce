use crate::audit::{AuditOptions, AuditReport, Auditor, ExclusionTable};
use crate::config::{MissingCheckOptions, VERBOSE_OPTION};
use crate::error::Result;
use crate::model::SymbolTree;
use crate::report::{AuditLogger, LogLevel};

/// The missing-documentation check as a host runs it: configured once,
/// invoked after the symbol tree is complete.
#[derive(Debug, Clone)]
pub struct MissingCheck {
    options: MissingCheckOptions,
    exclusions: ExclusionTable,
}

impl MissingCheck {
    pub fn new(options: MissingCheckOptions) -> Result<Self> {
        let exclusions = options.exclusion_table()?;
        Ok(Self {
            options,
            exclusions,
        })
    }

    pub fn options(&self) -> &MissingCheckOptions {
        &self.options
    }

    pub fn exclusions(&self) -> &ExclusionTable {
        &self.exclusions
    }

    /// Audit `tree` and report every violation plus a summary through `logger`.
    pub fn run(&self, tree: &SymbolTree, logger: &dyn AuditLogger) -> AuditReport {
        if self.options.disabled {
            logger.log("Missing Check plugin disabled", LogLevel::Info);
            return AuditReport::default();
        }

        let Some(scope) = self.options.scope() else {
            logger.log(
                &format!(
                    "Unrecognized missing check level '{}', no symbols will be checked",
                    self.options.level
                ),
                LogLevel::Warn,
            );
            return AuditReport::default();
        };

        let report = Auditor::new(scope)
            .with_exclusions(self.exclusions.clone())
            .with_options(AuditOptions {
                verbose: self.options.verbose,
            })
            .run(tree);

        for violation in &report.violations {
            logger.log(&violation.format_line(), LogLevel::Error);
        }

        if report.violation_count > 0 {
            let mut message = format!(
                "Found {} errors when checking for missing documentation.",
                report.violation_count
            );
            if !self.options.verbose {
                message.push_str(&format!(
                    " Consider using --{} for more detailed output",
                    VERBOSE_OPTION
                ));
            }
            logger.log(&message, LogLevel::Error);
        }

        tracing::debug!(
            nodes = tree.len(),
            violations = report.violation_count,
            "Missing check finished"
        );
        report
    }
}
