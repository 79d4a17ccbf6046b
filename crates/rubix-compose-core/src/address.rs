//! 固定IPv4アドレスの割り当て
//!
//! インデックス0がコーディネーター（ベースアドレス）、インデックス `i` が
//! `i` 番目のワーカーで、最終オクテットに `i` を加算したアドレスになる。
//! 最終オクテットが255を超える割り当ては拒否する。

use crate::error::{GenerateError, Result};
use std::net::Ipv4Addr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressAllocator {
    base: Ipv4Addr,
}

impl AddressAllocator {
    pub fn new(base: Ipv4Addr) -> Self {
        Self { base }
    }

    pub fn base(&self) -> Ipv4Addr {
        self.base
    }

    /// 割り当て可能なワーカー数
    pub fn capacity(&self) -> usize {
        usize::from(u8::MAX - self.base.octets()[3])
    }

    /// 指定インデックスのアドレスを計算
    pub fn address_for(&self, index: usize) -> Result<Ipv4Addr> {
        let [a, b, c, d] = self.base.octets();
        let last = u8::try_from(index)
            .ok()
            .and_then(|offset| d.checked_add(offset))
            .ok_or(GenerateError::AddressSpaceExhausted {
                requested: index,
                capacity: self.capacity(),
            })?;
        Ok(Ipv4Addr::new(a, b, c, last))
    }

    /// `worker_count` 台分のアドレスが確保できるか検証
    pub fn ensure_capacity(&self, worker_count: usize) -> Result<()> {
        let capacity = self.capacity();
        if worker_count > capacity {
            return Err(GenerateError::AddressSpaceExhausted {
                requested: worker_count,
                capacity,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allocator() -> AddressAllocator {
        AddressAllocator::new(Ipv4Addr::new(172, 18, 8, 0))
    }

    #[test]
    fn test_coordinator_gets_base_address() {
        assert_eq!(
            allocator().address_for(0).unwrap(),
            Ipv4Addr::new(172, 18, 8, 0)
        );
    }

    #[test]
    fn test_workers_are_sequential() {
        let allocator = allocator();
        for i in 1..=10u8 {
            assert_eq!(
                allocator.address_for(usize::from(i)).unwrap(),
                Ipv4Addr::new(172, 18, 8, i)
            );
        }
    }

    #[test]
    fn test_capacity() {
        assert_eq!(allocator().capacity(), 255);
        assert_eq!(
            AddressAllocator::new(Ipv4Addr::new(10, 0, 0, 250)).capacity(),
            5
        );
        assert_eq!(
            AddressAllocator::new(Ipv4Addr::new(10, 0, 0, 255)).capacity(),
            0
        );
    }

    #[test]
    fn test_last_octet_255_is_allowed() {
        assert_eq!(
            allocator().address_for(255).unwrap(),
            Ipv4Addr::new(172, 18, 8, 255)
        );
    }

    #[test]
    fn test_overflow_is_rejected() {
        let err = allocator().address_for(256).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::AddressSpaceExhausted {
                requested: 256,
                capacity: 255
            }
        ));

        let shifted = AddressAllocator::new(Ipv4Addr::new(10, 0, 0, 250));
        assert!(shifted.address_for(5).is_ok());
        assert!(shifted.address_for(6).is_err());
    }

    #[test]
    fn test_ensure_capacity() {
        let allocator = allocator();
        assert!(allocator.ensure_capacity(0).is_ok());
        assert!(allocator.ensure_capacity(255).is_ok());
        assert!(allocator.ensure_capacity(256).is_err());
    }
}
