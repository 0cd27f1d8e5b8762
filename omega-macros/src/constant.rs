use syn::{Expr, Stmt};

pub fn evaluate_range(expr: &Expr) -> Option<&syn::ExprRange> {
    match expr {
        Expr::Block(block) => {
            if block.block.stmts.len() == 1 {
                if let Stmt::Expr(expr, _) = &block.block.stmts[0] {
                    return evaluate_range(expr);
                }
            }
        }
        Expr::Group(group) => {
            return evaluate_range(&group.expr);
        }
        Expr::Paren(paren) => {
            return evaluate_range(&paren.expr);
        }
        Expr::Range(range) => {
            return Some(range);
        }
        _ => {}
    }
    None
}

pub fn evaluate_usize(expr: &Expr) -> Option<usize> {
    match expr {
        Expr::Block(block) => {
            if block.block.stmts.len() == 1 {
                if let Stmt::Expr(expr, _) = &block.block.stmts[0] {
                    return evaluate_usize(expr);
                }
            }
        }
        Expr::Lit(literal) => {
            if let syn::Lit::Int(int) = &literal.lit {
                return int.base10_parse().ok();
            }
        }
        Expr::Binary(binary) => {
            let left = evaluate_usize(&binary.left)?;
            let right = evaluate_usize(&binary.right)?;
            return match binary.op {
                syn::BinOp::Add(_) => left.checked_add(right),
                syn::BinOp::Sub(_) => left.checked_sub(right),
                syn::BinOp::Mul(_) => left.checked_mul(right),
                syn::BinOp::Div(_) => left.checked_div(right),
                syn::BinOp::Rem(_) => left.checked_rem(right),
                _ => None,
            };
        }
        Expr::Group(group) => {
            // `$e:expr` fragments forwarded by `macro_rules!` arrive in an invisible group
            return evaluate_usize(&group.expr);
        }
        Expr::Paren(expr) => {
            return evaluate_usize(&expr.expr);
        }
        _ => {}
    }
    None
}
