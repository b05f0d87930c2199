/// Ecosystem registry: well-known Solana protocols and their program ids
///
/// The registry is built once at startup and injected into the aggregation
/// engine. Declaration order is significant: it is the tie-break order when
/// two ecosystems end up with the same interaction count.
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Ecosystem {
    /// Internal short code, never exposed in API responses
    pub key: String,
    pub name: String,
    pub program_ids: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct EcosystemRegistry {
    entries: Vec<Ecosystem>,
    /// program id -> index into entries; first declaration wins
    by_program: HashMap<String, usize>,
}

impl EcosystemRegistry {
    pub fn new(entries: Vec<Ecosystem>) -> Self {
        let mut by_program = HashMap::new();
        for (index, ecosystem) in entries.iter().enumerate() {
            for program_id in &ecosystem.program_ids {
                by_program.entry(program_id.clone()).or_insert(index);
            }
        }
        Self {
            entries,
            by_program,
        }
    }

    /// The built-in table of well-known protocols
    pub fn builtin() -> Self {
        Self::new(vec![
            eco(
                "jupiter",
                "Jupiter",
                &[
                    "JUP6LkbZbjS1jKKwapdHNy74zcZ3tLUZoi5QNyVTaV4",
                    "JUP4Fb2cqiRUcaTHdrPC8h2gNsA2ETXiPDD33WcGuJB",
                    "JUP3c2Uh3WA4Ng34ocd2GKh6Er6bgE7nxkhMeL2HkQmp",
                ],
                "DEX Aggregator",
            ),
            eco(
                "raydium",
                "Raydium",
                &[
                    "675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8",
                    "CAMMCzo5YL8w4VFF8KVHrK22GGUsp5VTaW7grrKgrWqK",
                    "RVKd61ztZW9GUwhRbbLoYVRE5Xf1B2tVscKqwZqXgEr",
                ],
                "AMM DEX",
            ),
            eco(
                "orca",
                "Orca",
                &[
                    "whirLbMiicVdio4qvUfM5KAg6Ct8VwpYzGff3uctyCc",
                    "9W959DqEETiGZocYWCQPaJ6sBmUzgfxXfqGeTEdp3aQP",
                ],
                "AMM DEX",
            ),
            eco(
                "pump_fun",
                "Pump.fun",
                &[
                    "6EF8rrecthR5Dkzon8Nwu78hRvfCKubJ14M5uBEwF6P",
                    "PumpFunKEqN4kJLEzD9JFbVqSyJuPqxPwJsX5FQjf1",
                ],
                "Meme Coin Launchpad",
            ),
            eco(
                "magic_eden",
                "Magic Eden",
                &[
                    "M2mx93ekt1fmXSVkTrUL9xVFHkmME8HTUi5Cyc5aF7K",
                    "MEisE1HzehtrDpAAT8PnLHjpSSkRYakotTuJRPjTpo8",
                    "1BWutmTvYPwDtmw9abTkS4Ssr8no61spGAvW1X6NDix",
                ],
                "NFT Marketplace",
            ),
            eco(
                "tensor",
                "Tensor",
                &[
                    "TSWAPaqyCSx2KABk68Shruf4rp7CxcNi8hAsbdwmHbN",
                    "TCMPhJdwDryooaGtiocG1u3xcYbRpiJzb283XfCZsDp",
                ],
                "NFT Marketplace",
            ),
            eco(
                "meteora",
                "Meteora",
                &[
                    "LBUZKhRxPF3XUpBCjp4YzTKgLccjZhTSDM9YuVaPwxo",
                    "Eo7WjKq67rjJQSZxS6z3YkapzY3eMj6Xy8X5EQVn5UaB",
                ],
                "Liquidity Protocol",
            ),
            eco(
                "bags",
                "Bags",
                &[
                    "FEEhPbKVKnco9EXnaY3i4R5rQVUx91wgVfu8qokixywi",
                    "cpamdpZCGKUy5JxQXB4dcpGPiikHawvSWAd6mEn1sGG",
                    "dbcij3LWUppWqq96dh6gJWwBifmcGfLSB5D4DuSMaqN",
                ],
                "Token Launchpad",
            ),
            eco(
                "marinade",
                "Marinade",
                &["MarBmsSgKXdrN1egZf5sqe1TMai9K1rChYNDJgjq7aD"],
                "Liquid Staking",
            ),
            eco(
                "jito",
                "Jito",
                &[
                    "J1toso1uCk3RLmjorhTtrVwY9HJ7X8V9yYac6Y7kGCPn",
                    "Jito4APyf642JPZPx3hGc6WWJ8zPKtRbRs4P815Awbb",
                ],
                "MEV & Liquid Staking",
            ),
            eco(
                "kamino",
                "Kamino",
                &[
                    "KLend2g3cP87fffoy8q1mQqGKjrxjC8boSyAYavgmjD",
                    "6LtLpnUFNByNXLyCoK9wA2MykKAmQNZKBdY8s47dehDc",
                ],
                "Lending & Liquidity",
            ),
            eco(
                "marginfi",
                "MarginFi",
                &["MFv2hWf31Z9kbCa1snEPYctwafyhdvnV7FZnsebVacA"],
                "Lending Protocol",
            ),
            eco(
                "drift",
                "Drift",
                &["dRiftyHA39MWEi3m9aunc5MzRF1JYuBsbn6VPcn33UH"],
                "Perpetuals DEX",
            ),
            eco(
                "phoenix",
                "Phoenix",
                &["PhoeNiXZ8ByJGLkxNfZRnkUfjvmuYqLR89jjFHGqdXY"],
                "Orderbook DEX",
            ),
            eco(
                "star_atlas",
                "Star Atlas",
                &[
                    "BAP315i1xoAXqbJcTT1LrUS45N3tAQnNnPuNQkCcvbAr",
                    "FLEET1qqzpexyaDpqb2DGsSzE2sDCizewCg9WjrA6DBW",
                ],
                "Gaming",
            ),
            eco(
                "genopets",
                "Genopets",
                &["GENEUpG4Ncpjy3kTpVYCy3EhLGYqWQeFWLTe6H8QYZBv"],
                "Gaming",
            ),
            eco(
                "bonfida",
                "Bonfida",
                &["namesLPneVptA9Z5rqUDD9tMTWEJwofgaYwp8cawRkX"],
                "Name Service",
            ),
            eco(
                "metaplex",
                "Metaplex",
                &[
                    "metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s",
                    "hausS13jsjafwWwGqZTUQRmWyvyxn9EQpqMwV1PBBmk",
                    "cndy3Z4yapfJBmL3ShUp5exZKqR3z33thTzeNMm2gRZ",
                    "BGUMAp9Gq7iTEuizy4pqaxsTyUCBK68MDfK752saRPUY",
                ],
                "NFT Infrastructure",
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Ecosystem] {
        &self.entries
    }

    /// Registry index of the ecosystem owning this program id, if any
    pub fn index_for_program(&self, program_id: &str) -> Option<usize> {
        self.by_program.get(program_id).copied()
    }

    pub fn get(&self, index: usize) -> Option<&Ecosystem> {
        self.entries.get(index)
    }
}

fn eco(key: &str, name: &str, program_ids: &[&str], description: &str) -> Ecosystem {
    Ecosystem {
        key: key.to_string(),
        name: name.to_string(),
        program_ids: program_ids.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
    }
}
