use crate::domain::generator::{GeneratorInvocation, GeneratorOutcome};
use async_trait::async_trait;

// The build tool is an external collaborator: the domain only knows the
// arguments it hands over and the outcome it gets back.
#[async_trait]
pub trait ProjectFileGenerator: Send + Sync {
    async fn generate(&self, invocation: &GeneratorInvocation) -> GeneratorOutcome;
}
