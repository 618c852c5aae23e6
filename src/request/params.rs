use clap::ValueEnum;

/// Key sizes the request utility accepts for a new RSA key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum KeyLength {
    #[value(name = "1024")]
    Bits1024,
    #[default]
    #[value(name = "2048")]
    Bits2048,
    #[value(name = "4096")]
    Bits4096,
}

impl KeyLength {
    pub fn bits(self) -> u32 {
        match self {
            KeyLength::Bits1024 => 1024,
            KeyLength::Bits2048 => 2048,
            KeyLength::Bits4096 => 4096,
        }
    }

    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            1024 => Some(KeyLength::Bits1024),
            2048 => Some(KeyLength::Bits2048),
            4096 => Some(KeyLength::Bits4096),
            _ => None,
        }
    }
}

/// Cryptographic service providers the key can be generated under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CryptoProvider {
    #[default]
    RsaSchannel,
    DssDiffieHellman,
}

impl CryptoProvider {
    /// Provider name as it appears in the request document.
    pub fn display_name(self) -> &'static str {
        match self {
            CryptoProvider::RsaSchannel => {
                "Microsoft RSA SChannel Cryptographic Provider"
            }
            CryptoProvider::DssDiffieHellman => {
                "Microsoft Enhanced DSS and Diffie-Hellman Cryptographic Provider"
            }
        }
    }
}
