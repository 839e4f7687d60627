//! Parallel composition: run independent graphs concurrently, join all.
//!
//! Each branch is internally sequential; the join point blocks until every
//! branch completes. No partial results and no first-to-finish
//! short-circuiting — a branch error fails the whole composition.

use std::collections::HashMap;

use futures::future::try_join_all;

use crate::error::GraphError;
use crate::graph::CompiledGraph;
use crate::state::State;

/// Invokes every `(name, graph)` branch concurrently on a clone of `state`
/// and returns the final state per branch name once all have completed.
pub async fn invoke_parallel(
    branches: &[(String, CompiledGraph)],
    state: State,
) -> Result<HashMap<String, State>, GraphError> {
    let runs = branches.iter().map(|(name, graph)| {
        let state = state.clone();
        async move {
            let out = graph.invoke(state).await?;
            Ok::<_, GraphError>((name.clone(), out))
        }
    });

    let outputs = try_join_all(runs).await?;
    Ok(outputs.into_iter().collect())
}
