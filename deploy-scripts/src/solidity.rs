//! Definitions of Solidity types encoded during deployment

use alloy_sol_types::sol;

sol! {
    /// The rewards vault factory constructor arguments, in deployment order
    struct FactoryConstructorArgs {
        address bgt;
        address bera_chef;
        address distributor;
        address governance;
        address vault_implementation;
    }
}
