use maud::{html, Markup};

use crate::names;

pub fn page(result: Option<&str>) -> Markup {
    html! {
        h1 { "Math Expression Evaluator" }
        p {
            "Enter expressions like " code { "2*x + 3" } ", "
            code { "x^2 - 1 = 0" } ", or " code { "sin(pi/2)" } "."
        }

        form action=(names::SOLVER_URL) method="post" {
            label {
                "Expression"
                input type="text" name="expression" placeholder="x^2 - 1 = 0";
            }
            button type="submit" { "Evaluate" }
        }

        @if let Some(result) = result {
            article {
                h3 { "Result" }
                pre { (result) }
            }
        }
    }
}
