use rdfwalk_graph::GraphError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalkError {
    #[error("root `{0}` is not in the graph")]
    UnknownRoot(String),
    #[error(transparent)]
    Graph(#[from] GraphError),
}
