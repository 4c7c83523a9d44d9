use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Binding power of every infix operator, higher binds tighter.
    /// Assignment sits at the bottom so everything to its right becomes
    /// the assigned value.
    pub static ref PRECEDENCE_LOOKUP: HashMap<&'static str, u8> = {
        let mut map = HashMap::new();
        map.insert("=", 1);
        map.insert("||", 2);
        map.insert("&&", 3);
        map.insert("<", 7);
        map.insert(">", 7);
        map.insert("<=", 7);
        map.insert(">=", 7);
        map.insert("==", 7);
        map.insert("!=", 7);
        map.insert("+", 10);
        map.insert("-", 10);
        map.insert("*", 20);
        map.insert("/", 20);
        map.insert("%", 20);
        map
    };
}
