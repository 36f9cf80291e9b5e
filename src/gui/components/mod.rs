pub mod role_board;
pub mod spell_pool;
