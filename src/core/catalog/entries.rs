//! Embedded content for the built-in catalog.

use super::{AlgorithmEntry, Difficulty};

/// Tips that apply to every sample listing.
pub const COMMON_TIPS: &[&str] = &[
    "Requires the `cryptography` Python package",
    "Compatible with Python 3.6+",
    "For production use, ensure proper key management",
];

pub(super) const ALGORITHMS: &[AlgorithmEntry] = &[
    AlgorithmEntry {
        key: "rsa",
        name: "RSA",
        difficulty: Difficulty::Beginner,
        style_hint: "purple-indigo",
        description: r#"RSA (Rivest–Shamir–Adleman) is an asymmetric encryption algorithm that uses a pair of keys: a public key for encryption and a private key for decryption.

Key features:
• Security is based on the mathematical difficulty of factoring the product of two large prime numbers
• Widely used for secure data transmission, digital signatures, and key exchange
• Standard key sizes range from 2048 to 4096 bits for adequate security
• Slower than symmetric algorithms, so often used to encrypt symmetric keys rather than bulk data
• Provides both confidentiality (via encryption) and authentication (via digital signatures)"#,
        sample_code: r#"from cryptography.hazmat.primitives.asymmetric import rsa, padding
from cryptography.hazmat.primitives import hashes

# Generate RSA key pair
private_key = rsa.generate_private_key(
    public_exponent=65537,  # Standard public exponent
    key_size=2048,          # Key size (2048 or 4096 bits)
)
public_key = private_key.public_key()

# Encrypt with public key
plaintext = b"Sensitive data"
ciphertext = public_key.encrypt(
    plaintext,
    padding.OAEP(
        mgf=padding.MGF1(algorithm=hashes.SHA256()),
        algorithm=hashes.SHA256(),
        label=None
    )
)"#,
        extra_note: Some("Use strong key sizes (2048 bits minimum) for adequate security"),
    },
    AlgorithmEntry {
        key: "ecc",
        name: "ECC",
        difficulty: Difficulty::Intermediate,
        style_hint: "pink-rose",
        description: r#"Elliptic Curve Cryptography (ECC) is an advanced asymmetric encryption approach based on the algebraic structure of elliptic curves over finite fields.

Key features:
• Provides the same security level as RSA but with significantly smaller key sizes (256-bit ECC ≈ 3072-bit RSA)
• More efficient in terms of computational overhead and bandwidth requirements
• Ideal for resource-constrained environments like IoT devices, smart cards, and mobile applications
• Used for key agreement (ECDH - Elliptic Curve Diffie-Hellman) and digital signatures (ECDSA)"#,
        sample_code: r#"from cryptography.hazmat.primitives.asymmetric import ec
from cryptography.hazmat.primitives import hashes
from cryptography.hazmat.primitives.kdf.hkdf import HKDF
from cryptography.hazmat.primitives import serialization

# Generate ECC key pair
private_key = ec.generate_private_key(ec.SECP256R1())  # NIST P-256 curve
public_key = private_key.public_key()

# Serialize public key
public_pem = public_key.public_bytes(
    encoding=serialization.Encoding.PEM,
    format=serialization.PublicFormat.SubjectPublicKeyInfo
)"#,
        extra_note: Some("SECP256R1 (NIST P-256) provides approximately 128 bits of security"),
    },
    AlgorithmEntry {
        key: "aes",
        name: "AES",
        difficulty: Difficulty::Intermediate,
        style_hint: "amber-yellow",
        description: r#"Advanced Encryption Standard (AES) is a symmetric block cipher adopted as an encryption standard by the U.S. government and widely used worldwide.

Key features:
• Symmetric algorithm that uses the same key for both encryption and decryption
• Operates on fixed block sizes of 128 bits with key lengths of 128, 192, or 256 bits
• Offers excellent performance in both software and hardware implementations
• Resistant to all known practical cryptanalytic attacks when properly implemented
• Used in various modes of operation: CBC, GCM, CTR, etc."#,
        sample_code: r#"import os
from cryptography.hazmat.primitives.ciphers import Cipher, algorithms, modes

def generate_key():
    """Generate a random 256-bit (32-byte) AES key"""
    return os.urandom(32)  # 256 bits = 32 bytes

def generate_iv():
    """Generate a random 96-bit (12-byte) IV for GCM mode"""
    return os.urandom(12)  # 96 bits = 12 bytes

def encrypt_aes_gcm(plaintext, key):
    """
    Encrypt data using AES in GCM mode
    Returns (iv, ciphertext, tag) tuple
    """
    if isinstance(plaintext, str):
        plaintext = plaintext.encode('utf-8')

    # Generate a random IV (nonce)
    iv = generate_iv()

    # Create an encryptor object
    encryptor = Cipher(
        algorithms.AES(key),
        modes.GCM(iv)
    ).encryptor()

    # Encrypt the plaintext
    ciphertext = encryptor.update(plaintext) + encryptor.finalize()

    # Return the IV, ciphertext, and authentication tag
    return (iv, ciphertext, encryptor.tag)"#,
        extra_note: Some("Uses GCM (Galois/Counter Mode) which provides authenticated encryption"),
    },
    AlgorithmEntry {
        key: "chacha20",
        name: "ChaCha20",
        difficulty: Difficulty::Advanced,
        style_hint: "emerald-teal",
        description: r#"ChaCha20 is a modern symmetric stream cipher designed by Daniel J. Bernstein as an alternative to AES. It's often paired with the Poly1305 authenticator to provide authenticated encryption.

Key features:
• High-speed software implementation on modern processors
• Designed to be resistant to timing attacks
• Uses a 256-bit key and a 96-bit nonce (number used once)
• Particularly efficient on platforms without AES hardware acceleration
• Adopted in TLS 1.3, SSH, and widely used in mobile and IoT applications
• Offers excellent performance on devices with limited processing power"#,
        sample_code: r#"import os
from cryptography.hazmat.primitives.ciphers import Cipher, algorithms, modes

def generate_key():
    """Generate a random 256-bit (32-byte) ChaCha20 key"""
    return os.urandom(32)

def generate_nonce():
    """Generate a random 96-bit (12-byte) nonce for ChaCha20"""
    return os.urandom(12)

def encrypt_chacha20(plaintext, key, nonce=None):
    """
    Encrypt data using ChaCha20
    Returns (nonce, ciphertext) tuple
    """
    if isinstance(plaintext, str):
        plaintext = plaintext.encode('utf-8')

    # Generate a random nonce if not provided
    if nonce is None:
        nonce = generate_nonce()

    # Create ChaCha20 cipher object
    cipher = Cipher(
        algorithms.ChaCha20(key, nonce),
        mode=None
    )

    # Encrypt the plaintext
    encryptor = cipher.encryptor()
    ciphertext = encryptor.update(plaintext) + encryptor.finalize()

    return (nonce, ciphertext)

def decrypt_chacha20(ciphertext, key, nonce):
    """Decrypt ChaCha20 encrypted data"""
    # Create ChaCha20 cipher object
    cipher = Cipher(
        algorithms.ChaCha20(key, nonce),
        mode=None
    )

    # Decrypt the ciphertext
    decryptor = cipher.decryptor()
    return decryptor.update(ciphertext) + decryptor.finalize()"#,
        extra_note: Some("Consider using ChaCha20-Poly1305 for authenticated encryption"),
    },
];
