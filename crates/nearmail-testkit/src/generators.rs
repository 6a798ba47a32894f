//! Proptest generators and seeded corpora for property-based testing.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use nearmail::SignMessageParams;
use nearmail_core::{Mail, Message, Payload, PayloadBuilder, Person};

/// Generate a short printable string (including the empty string).
pub fn text() -> impl Strategy<Value = String> {
    "[ -~]{0,24}".prop_map(String::from)
}

/// Generate a NEAR-style account handle.
pub fn account_id() -> impl Strategy<Value = String> {
    "[a-z0-9]{2,12}\\.(near|testnet)".prop_map(String::from)
}

/// Generate a Person.
pub fn person() -> impl Strategy<Value = Person> {
    (text(), account_id()).prop_map(|(name, wallet)| Person::new(name, wallet))
}

/// Generate a Mail.
pub fn mail() -> impl Strategy<Value = Mail> {
    (person(), person(), text()).prop_map(|(from, to, contents)| Mail::new(from, to, contents))
}

/// Generate a plain or structured Message.
pub fn message() -> impl Strategy<Value = Message> {
    prop_oneof![
        text().prop_map(Message::Plain),
        mail().prop_map(Message::Structured),
    ]
}

/// Generate an optional callback URL; `Some("")` is included.
pub fn callback_url() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "https://[a-z]{1,10}\\.example/[a-z]{0,8}".prop_map(Some),
    ]
}

/// Parameters for generating a sign request.
#[derive(Debug, Clone)]
pub struct SignParams {
    pub message: Message,
    pub recipient: String,
    pub nonce: [u8; 32],
    pub callback_url: Option<String>,
}

impl SignParams {
    pub fn to_params(&self) -> SignMessageParams {
        SignMessageParams {
            message: self.message.clone(),
            recipient: self.recipient.clone(),
            nonce: self.nonce.to_vec(),
            callback_url: self.callback_url.clone(),
        }
    }

    pub fn to_payload(&self) -> Payload {
        PayloadBuilder::new(self.message.clone())
            .recipient(self.recipient.clone())
            .nonce(self.nonce)
            .maybe_callback_url(self.callback_url.clone())
            .build()
            .expect("generated nonce is 32 bytes")
    }
}

impl Arbitrary for SignParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (message(), account_id(), any::<[u8; 32]>(), callback_url())
            .prop_map(|(message, recipient, nonce, callback_url)| SignParams {
                message,
                recipient,
                nonce,
                callback_url,
            })
            .boxed()
    }
}

/// Strategy alias for [`SignParams`].
pub fn sign_params() -> impl Strategy<Value = SignParams> {
    any::<SignParams>()
}

fn random_string(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

/// A reproducible corpus of plain-message sign requests.
pub fn seeded_corpus(seed: u64, count: usize) -> Vec<SignParams> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut nonce = [0u8; 32];
            rng.fill(&mut nonce);
            let callback_url = match rng.gen_range(0..3) {
                0 => None,
                1 => Some(String::new()),
                _ => Some(format!("https://{}.example", random_string(&mut rng, 8))),
            };
            SignParams {
                message: Message::Plain(random_string(&mut rng, 32)),
                recipient: format!("{}.near", random_string(&mut rng, 12)),
                nonce,
                callback_url,
            }
        })
        .collect()
}

/// Every single-field mutation of `params` (recipient, nonce, callback
/// presence, message content).
pub fn single_field_variants(params: &SignParams) -> Vec<SignParams> {
    let mut recipient = params.clone();
    recipient.recipient.push('x');

    let mut nonce = params.clone();
    nonce.nonce[31] ^= 0x01;

    let mut callback = params.clone();
    callback.callback_url = match &params.callback_url {
        Some(_) => None,
        None => Some(String::new()),
    };

    let mut message = params.clone();
    message.message = match &params.message {
        Message::Plain(text) => Message::Plain(format!("{text}!")),
        Message::Structured(mail) => {
            let mut mail = mail.clone();
            mail.contents.push('!');
            Message::Structured(mail)
        }
    };

    vec![recipient, nonce, callback, message]
}
