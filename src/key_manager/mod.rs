/*!
 * Generic key-manager abstraction
 *
 * This module defines the contract every concrete key manager implements,
 * the primitive-factory registry it dispatches through, and the reusable
 * validation checks managers compose.
 */

mod factory;
mod manager;
pub mod validation;

pub use factory::FactorySet;
pub use factory::PrimitiveFactory;
pub use manager::KeyManager;
pub use manager::KeyMaterialType;
pub use validation::validate_aes_key_size;
pub use validation::validate_key_size;
pub use validation::validate_version;
