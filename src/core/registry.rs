use crate::analyst::Gaffer;
use crate::core::catalog::{self, CATALOG};
use crate::core::tool::{Arguments, ToolDescriptor, ToolError};
use crate::llm::Completer;
use crate::prompts::UseCase;

/// Routes tool calls by name to the analyst or the knowledge base.
pub struct ToolRegistry<C> {
    gaffer: Gaffer<C>,
}

impl<C: Completer> ToolRegistry<C> {
    pub fn new(completer: C) -> Self {
        Self {
            gaffer: Gaffer::new(completer),
        }
    }

    #[cfg(test)]
    pub(crate) fn gaffer(&self) -> &Gaffer<C> {
        &self.gaffer
    }

    /// All exposed tools, in catalog order
    pub fn list_tools(&self) -> &'static [ToolDescriptor] {
        &CATALOG
    }

    /// Run a tool and return its text. Failures come back as in-band text too.
    pub async fn call_tool(&self, name: &str, args: &Arguments) -> String {
        match self.dispatch(name, args).await {
            Ok(text) => {
                tracing::debug!(tool = %name, len = text.len(), "Tool call complete");
                text
            }
            Err(e) => {
                tracing::warn!(tool = %name, error = %e, "Tool call failed");
                e.to_string()
            }
        }
    }

    pub async fn dispatch(&self, name: &str, args: &Arguments) -> Result<String, ToolError> {
        let tool = catalog::find(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        if let Some(field) = tool.first_missing(args) {
            return Err(ToolError::MissingArgument(field));
        }

        tracing::info!(tool = %name, args = args.len(), "Dispatching tool call");

        match tool.name {
            catalog::ANALYZE_TACTICS => self.gaffer.ask(UseCase::TacticalQuery, args).await,
            catalog::COUNTER_FORMATION => self.gaffer.ask(UseCase::CounterFormation, args).await,
            catalog::ANALYZE_MATCH => self.gaffer.ask(UseCase::MatchAnalysis, args).await,
            catalog::GET_TACTICAL_KNOWLEDGE => Ok(self.gaffer.knowledge().retrieve(
                args.get("topic").unwrap_or_default(),
                args.get("era"),
                args.get("coach"),
            )),
            other => Err(ToolError::UnknownTool(other.to_string())),
        }
    }
}
