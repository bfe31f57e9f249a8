pub mod channel;
pub mod member;
pub mod role;

pub use channel::{CreateChannelRequest, CreateMessageRequest, CreatedChannel, CreatedMessage};
pub use member::GuildMember;
pub use role::{CreateRoleRequest, CreatedRole};
