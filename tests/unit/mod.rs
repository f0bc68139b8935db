mod create_index;
mod restore_contract;
