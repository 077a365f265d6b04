pub mod create_airstream;
pub use create_airstream::*;

pub mod claim;
pub use claim::*;

pub mod pause;
pub use pause::*;

pub mod resume;
pub use resume::*;

pub mod withdraw;
pub use withdraw::*;

pub mod transfer_admin;
pub use transfer_admin::*;

pub mod redirect_reward;
pub use redirect_reward::*;

pub mod redirect_rewards;
pub use redirect_rewards::*;

pub mod stream_back_to_treasury;
pub use stream_back_to_treasury::*;

pub mod query_member;
pub use query_member::*;
