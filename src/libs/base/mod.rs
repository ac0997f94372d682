//! The Base chain client and helpers.  This module exposes a low level
//! [`client::BaseClient`] for sending JSON-RPC requests, the ERC-20
//! read interface in [`erc20`], the network parameter tables in
//! [`networks`] and balance formatting helpers in [`spells`].
pub mod client;
pub mod erc20;
pub mod networks;
pub mod spells;
