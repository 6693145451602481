use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    // 箸を用意する前に弾く設定の誤り
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // スレッドを作れなかった。全員揃わないなら実行しない
    #[error("failed to create philosopher thread #{id}")]
    AgentStart {
        id: usize,
        #[source]
        source: io::Error,
    },

    #[error("philosopher thread #{0} panicked")]
    AgentPanicked(usize),
}
