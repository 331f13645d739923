//! Wire messages of the `looprpc.SwapServer` service.
//!
//! Field numbers are part of the wire contract with the swap server and must
//! not be changed.

/// Request for the current loop out terms.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServerLoopOutTermsRequest {}

/// Loop out amount bounds.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServerLoopOutTerms {
    #[prost(uint64, tag = "1")]
    pub min_swap_amount: u64,
    #[prost(uint64, tag = "2")]
    pub max_swap_amount: u64,
}

/// Request for a loop out quote.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServerLoopOutQuoteRequest {
    #[prost(uint64, tag = "1")]
    pub amt: u64,
    /// Unix seconds.
    #[prost(int64, tag = "2")]
    pub swap_publication_deadline: i64,
}

/// Loop out quote.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServerLoopOutQuote {
    /// Hex encoded 33-byte node key.
    #[prost(string, tag = "1")]
    pub swap_payment_dest: ::prost::alloc::string::String,
    #[prost(uint64, tag = "2")]
    pub swap_fee: u64,
    #[prost(uint64, tag = "3")]
    pub prepay_amt: u64,
    #[prost(int32, tag = "4")]
    pub cltv_delta: i32,
}

/// Request for the current loop in terms.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServerLoopInTermsRequest {}

/// Loop in amount bounds.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServerLoopInTerms {
    #[prost(uint64, tag = "1")]
    pub min_swap_amount: u64,
    #[prost(uint64, tag = "2")]
    pub max_swap_amount: u64,
}

/// Request for a loop in quote.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServerLoopInQuoteRequest {
    #[prost(uint64, tag = "1")]
    pub amt: u64,
}

/// Loop in quote.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServerLoopInQuoteResponse {
    #[prost(uint64, tag = "1")]
    pub swap_fee: u64,
    #[prost(int32, tag = "2")]
    pub cltv_delta: i32,
}

/// Loop out creation request.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServerLoopOutRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub receiver_key: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub swap_hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "3")]
    pub amt: u64,
    /// Unix seconds.
    #[prost(int64, tag = "4")]
    pub swap_publication_deadline: i64,
}

/// Loop out creation response.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServerLoopOutResponse {
    #[prost(string, tag = "1")]
    pub swap_invoice: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub prepay_invoice: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "3")]
    pub sender_key: ::prost::alloc::vec::Vec<u8>,
    #[prost(int32, tag = "4")]
    pub expiry: i32,
}

/// Loop in creation request.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServerLoopInRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub sender_key: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub swap_hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "3")]
    pub amt: u64,
    #[prost(string, tag = "4")]
    pub swap_invoice: ::prost::alloc::string::String,
}

/// Loop in creation response.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServerLoopInResponse {
    #[prost(bytes = "vec", tag = "1")]
    pub receiver_key: ::prost::alloc::vec::Vec<u8>,
    #[prost(int32, tag = "2")]
    pub expiry: i32,
}
