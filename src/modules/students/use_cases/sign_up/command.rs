use crate::modules::students::core::reg_number::RegNumber;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUp {
    pub name: String,
    pub reg_number: RegNumber,
    pub password: String,
    pub signed_up_at: i64,
}

#[cfg(test)]
mod sign_up_command_tests {
    use super::*;
    use crate::tests::fixtures::commands::sign_up::SignUpBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn sign_up_command() -> SignUp {
        SignUpBuilder::new().build()
    }

    #[rstest]
    fn it_should_create_the_command(sign_up_command: SignUp) {
        assert_eq!(sign_up_command.reg_number.as_str(), "2020/123456");
        assert_eq!(sign_up_command.name, "Ada Obi");
    }
}
