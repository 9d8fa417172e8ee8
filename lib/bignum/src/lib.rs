/*!
Arbitrary-precision unsigned integer arithmetic.

> Note that `bignum` is still `0.*.*`, so breaking changes
> [may occur at any time](https://semver.org/#spec-item-4). If you must depend
> on `bignum`, we recommend pinning to a specific version, i.e., `=0.y.z`.

## Word Buffers

[`WordBuffer`] stores a non-negative integer as 32-bit words, most
significant word first, and provides:

- Hex parsing and canonical hex formatting (`parse`, `to_hex`, `{:x}`).
- Bitwise `complement`, `xor`, `or` and `and` over operands of any length.
- Logical `shift_left` and `shift_right` by any number of bits.
- `widening_add`, `subtract` and `compare`.

```
use openzeppelin_bignum::WordBuffer;

let a = WordBuffer::parse("ffffffff")?;
let b = WordBuffer::parse("1")?;

let sum = a.widening_add(&b);
assert_eq!(sum.to_hex(), "100000000");
assert_eq!(sum.subtract(&b)?, a);
assert_eq!(a.shift_left(4).to_hex(), "ffffffff0");
# Ok::<(), openzeppelin_bignum::Error>(())
```
*/

pub mod arithmetic;
pub mod error;

pub use arithmetic::{BitShift, WordBuffer};
pub use error::{Error, Result};
