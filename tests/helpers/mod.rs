// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for slimwallet integration tests
//!
//! Provides mock implementations of the chain client and price feed so the
//! wallet flows can be tested without a node or network access.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use alloy_primitives::{address, Address, TxHash, U256};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use slimwallet::{
    BlockchainConfig, ChainAssets, ChainClient, ChainRejection, NetworkError, PriceError,
    PriceFeed, TransferError, TransferReceipt, TransferRequest, WalletSession,
};

/// Address of the unlocked test wallet
pub const WALLET: Address = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");

/// A valid recipient, in checksummed form
pub const RECIPIENT: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

/// USDC contract address from [`CONFIG_JSON`]
pub const USDC: Address = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");

/// USDT contract address from [`CONFIG_JSON`]
pub const USDT: Address = address!("dac17f958d2ee523a2206206994597c13d831ec7");

/// One chain with a native asset and two tokens
pub const CONFIG_JSON: &str = r#"{
    "chains": [
        {
            "id": "ethereum",
            "name": "Ethereum",
            "nativeAssetId": "eth",
            "blockchainExplorer": "https://etherscan.io/tx",
            "rpcEndpoint": "http://localhost:8545"
        }
    ],
    "assets": [
        { "id": "eth", "chainId": "ethereum", "ticker": "ETH", "name": "Ether",
          "decimals": 18, "coingeckoId": "ethereum" },
        { "id": "usdc", "chainId": "ethereum", "ticker": "USDC", "name": "USD Coin",
          "decimals": 6, "address": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
          "coingeckoId": "usd-coin" },
        { "id": "usdt", "chainId": "ethereum", "ticker": "USDT", "name": "Tether USD",
          "decimals": 6, "address": "0xdAC17F958D2ee523a2206206994597C13D831ec7",
          "coingeckoId": "tether" }
    ]
}"#;

/// The validated assets of [`CONFIG_JSON`]
pub fn chain_assets() -> ChainAssets {
    BlockchainConfig::from_json_str(CONFIG_JSON)
        .unwrap()
        .select_chain(None)
        .unwrap()
}

/// A session for [`WALLET`] backed by `client`
pub fn session(client: &Arc<MockChainClient>) -> WalletSession {
    let client: Arc<dyn ChainClient> = client.clone();
    WalletSession::new(WALLET, chain_assets(), client)
}

/// How [`MockChainClient::send_transfer`] behaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendBehavior {
    /// Broadcast succeeds with a successful receipt
    Success,
    /// Broadcast succeeds but the receipt reports failure
    Reverted,
    /// The node rejects the signed transaction
    BroadcastRejected,
    /// The node cannot be reached
    NetworkDown,
    /// Broadcast succeeds, then the receipt wait fails until
    /// [`MockChainClient::restore_receipts`] is called
    ReceiptLost,
    /// Broadcast succeeds, then the receipt wait never completes
    Hang,
}

/// Mock ChainClient with configurable responses
///
/// Every estimate and broadcast request is recorded for later assertions.
///
/// # Example
///
/// ```rust,ignore
/// let client = Arc::new(
///     MockChainClient::new()
///         .with_gas_units(21_000)
///         .with_failing_token(USDT),
/// );
/// ```
pub struct MockChainClient {
    gas_units: u64,
    gas_revert: Option<String>,
    fee_per_gas: Option<u128>,
    native_balance: Option<U256>,
    token_balances: HashMap<Address, U256>,
    failing_tokens: HashSet<Address>,
    send: SendBehavior,
    tx_hash: TxHash,
    receipts_restored: AtomicBool,
    estimated: Mutex<Vec<TransferRequest>>,
    sent: Mutex<Vec<TransferRequest>>,
}

impl Default for MockChainClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockChainClient {
    /// 21,000 gas at 20 gwei, 1 ETH balance, successful sends
    pub fn new() -> Self {
        Self {
            gas_units: 21_000,
            gas_revert: None,
            fee_per_gas: Some(20_000_000_000),
            native_balance: Some(U256::from(10u64.pow(18))),
            token_balances: HashMap::new(),
            failing_tokens: HashSet::new(),
            send: SendBehavior::Success,
            tx_hash: TxHash::repeat_byte(0xab),
            receipts_restored: AtomicBool::new(false),
            estimated: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn with_gas_units(mut self, gas_units: u64) -> Self {
        self.gas_units = gas_units;
        self
    }

    /// Make gas estimation revert with `reason`
    pub fn with_gas_revert(mut self, reason: &str) -> Self {
        self.gas_revert = Some(reason.to_string());
        self
    }

    pub fn with_fee_per_gas(mut self, fee_per_gas: u128) -> Self {
        self.fee_per_gas = Some(fee_per_gas);
        self
    }

    /// Simulate a node without EIP-1559 fee data
    pub fn without_fee_data(mut self) -> Self {
        self.fee_per_gas = None;
        self
    }

    pub fn with_native_balance(mut self, balance: U256) -> Self {
        self.native_balance = Some(balance);
        self
    }

    /// Make the native balance query fail
    pub fn with_failing_native_balance(mut self) -> Self {
        self.native_balance = None;
        self
    }

    pub fn with_token_balance(mut self, token: Address, balance: U256) -> Self {
        self.token_balances.insert(token, balance);
        self
    }

    /// Make `balanceOf` on `token` fail
    pub fn with_failing_token(mut self, token: Address) -> Self {
        self.failing_tokens.insert(token);
        self
    }

    pub fn with_send(mut self, send: SendBehavior) -> Self {
        self.send = send;
        self
    }

    /// Hash reported by receipts
    pub fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    /// Requests passed to `estimate_gas`
    pub fn estimated(&self) -> Vec<TransferRequest> {
        self.estimated.lock().unwrap().clone()
    }

    /// Let receipt waits succeed from now on under [`SendBehavior::ReceiptLost`]
    pub fn restore_receipts(&self) {
        self.receipts_restored.store(true, Ordering::SeqCst);
    }

    /// Requests passed to `broadcast_transfer`
    pub fn sent(&self) -> Vec<TransferRequest> {
        self.sent.lock().unwrap().clone()
    }
}

fn unreachable_node(operation: &str) -> NetworkError {
    NetworkError::rpc_failed(
        operation,
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
    )
}

#[async_trait]
impl ChainClient for MockChainClient {
    async fn fee_per_gas(&self) -> Result<u128, NetworkError> {
        self.fee_per_gas
            .ok_or_else(|| NetworkError::fee_data_unavailable("baseFeePerGas missing"))
    }

    async fn native_balance(&self, _holder: Address) -> Result<U256, NetworkError> {
        self.native_balance
            .ok_or_else(|| unreachable_node("eth_getBalance"))
    }

    async fn token_balance(&self, token: Address, _holder: Address) -> Result<U256, NetworkError> {
        if self.failing_tokens.contains(&token) {
            return Err(unreachable_node("balanceOf"));
        }
        Ok(self.token_balances.get(&token).copied().unwrap_or_default())
    }

    async fn estimate_gas(&self, request: &TransferRequest) -> Result<u64, TransferError> {
        self.estimated.lock().unwrap().push(*request);
        match &self.gas_revert {
            Some(reason) => Err(ChainRejection::gas_estimation_reverted(reason.clone()).into()),
            None => Ok(self.gas_units),
        }
    }

    async fn broadcast_transfer(&self, request: &TransferRequest) -> Result<TxHash, TransferError> {
        self.sent.lock().unwrap().push(*request);
        match self.send {
            SendBehavior::BroadcastRejected => Err(ChainRejection::broadcast_rejected(
                "insufficient funds for gas * price + value",
            )
            .into()),
            SendBehavior::NetworkDown => Err(unreachable_node("eth_sendRawTransaction").into()),
            _ => Ok(self.tx_hash),
        }
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TransferReceipt, TransferError> {
        match self.send {
            SendBehavior::Reverted => Ok(TransferReceipt {
                tx_hash,
                success: false,
            }),
            SendBehavior::ReceiptLost if !self.receipts_restored.load(Ordering::SeqCst) => {
                Err(NetworkError::receipt_unavailable(
                    tx_hash,
                    std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset"),
                )
                .into())
            }
            SendBehavior::Hang => std::future::pending().await,
            _ => Ok(TransferReceipt {
                tx_hash,
                success: true,
            }),
        }
    }
}

/// How [`MockPriceFeed`] answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceMode {
    /// Answer from the configured quotes; unknown ids fail
    Quotes,
    /// Every request is rate limited
    RateLimited,
    /// The API cannot be reached
    Unreachable,
}

/// Mock PriceFeed with fixed quotes
pub struct MockPriceFeed {
    prices: HashMap<String, BigDecimal>,
    mode: PriceMode,
    requests: Mutex<Vec<String>>,
}

impl MockPriceFeed {
    pub fn new() -> Self {
        Self {
            prices: HashMap::new(),
            mode: PriceMode::Quotes,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Quote `price_id` at `price` (a decimal string)
    pub fn with_price(mut self, price_id: &str, price: &str) -> Self {
        self.prices
            .insert(price_id.to_string(), BigDecimal::from_str(price).unwrap());
        self
    }

    pub fn with_mode(mut self, mode: PriceMode) -> Self {
        self.mode = mode;
        self
    }

    /// Ids requested so far
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockPriceFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceFeed for MockPriceFeed {
    async fn usd_price(&self, price_id: &str) -> Result<BigDecimal, PriceError> {
        self.requests.lock().unwrap().push(price_id.to_string());
        match self.mode {
            PriceMode::Quotes => {
                self.prices
                    .get(price_id)
                    .cloned()
                    .ok_or_else(|| PriceError::UnknownAsset {
                        id: price_id.to_string(),
                    })
            }
            PriceMode::RateLimited => Err(PriceError::RateLimited),
            PriceMode::Unreachable => Err(PriceError::unreachable_api(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "timed out",
            ))),
        }
    }
}
