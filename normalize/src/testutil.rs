use std::path::Path;

use anyhow::Result;
use mockall::mock;

use crate::pagesource::{PageSource, PageText};

mock! {
    pub PdfPages {}

    impl PageSource for PdfPages {
        fn pages(&self, pdf_path: &Path) -> Result<Vec<PageText>>;
    }
}

/// Two pages of results: three accepted lines and one that is one field
/// short.
pub fn results_pages() -> Vec<PageText> {
    vec![
        PageText::from(
            "2019 Championship Tour\n\
            Event 1 - Results\n\
            Pos  PIC  Class  No  Driver  Vehicle  Tire  Time  Factor  Corr  Diff  CDiff  Pts\n\
            1  1  SM  17  John Smith 1999 Mazda Miata BFGoodrich 99.512  1.000  99.512  -  -  100\n\
            \n\
            2  1  STU  42  Raj Canekeratne BMW M3  Hoosier  1:02.345  0.950  0:59.228  0.512  0.301  95\n",
        ),
        PageText::from(
            "3  2  SSM  5  Al Jones 2003 Chevy Corvette Z06BFGoodrich  1:01.000  0.900  0:54.900  1.000  0.900  90\n\
            9  9  SM  97  Ned Short 1999 Mazda Miata  Hoosier  1:09.000  1.000  -  -  100\n",
        ),
    ]
}
