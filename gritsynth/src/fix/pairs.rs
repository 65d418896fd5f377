//! The mixed-type surface of the fixed-point family: for every ordered
//! pair of members, a saturating conversion plus saturating add, subtract
//! and multiply taking the other type. Each block below is one receiving
//! type; the `fixed_pair!` rows are its sixteen partners.

use super::*;

fixed_pair!(U08 => U17 (u8): to_u17, to_u08, sadd_u17, ssub_u17, smul_u17);
fixed_pair!(U08 => U26 (u8): to_u26, to_u08, sadd_u26, ssub_u26, smul_u26);
fixed_pair!(U08 => U35 (u8): to_u35, to_u08, sadd_u35, ssub_u35, smul_u35);
fixed_pair!(U08 => U44 (u8): to_u44, to_u08, sadd_u44, ssub_u44, smul_u44);
fixed_pair!(U08 => U53 (u8): to_u53, to_u08, sadd_u53, ssub_u53, smul_u53);
fixed_pair!(U08 => U62 (u8): to_u62, to_u08, sadd_u62, ssub_u62, smul_u62);
fixed_pair!(U08 => U71 (u8): to_u71, to_u08, sadd_u71, ssub_u71, smul_u71);
fixed_pair!(U08 => U80 (u8): to_u80, to_u08, sadd_u80, ssub_u80, smul_u80);
fixed_pair!(U08 => S17 (i8): to_s17, to_u08, sadd_s17, ssub_s17, smul_s17);
fixed_pair!(U08 => S26 (i8): to_s26, to_u08, sadd_s26, ssub_s26, smul_s26);
fixed_pair!(U08 => S35 (i8): to_s35, to_u08, sadd_s35, ssub_s35, smul_s35);
fixed_pair!(U08 => S44 (i8): to_s44, to_u08, sadd_s44, ssub_s44, smul_s44);
fixed_pair!(U08 => S53 (i8): to_s53, to_u08, sadd_s53, ssub_s53, smul_s53);
fixed_pair!(U08 => S62 (i8): to_s62, to_u08, sadd_s62, ssub_s62, smul_s62);
fixed_pair!(U08 => S71 (i8): to_s71, to_u08, sadd_s71, ssub_s71, smul_s71);
fixed_pair!(U08 => S80 (i8): to_s80, to_u08, sadd_s80, ssub_s80, smul_s80);

fixed_pair!(U17 => U08 (u8): to_u08, to_u17, sadd_u08, ssub_u08, smul_u08);
fixed_pair!(U17 => U26 (u8): to_u26, to_u17, sadd_u26, ssub_u26, smul_u26);
fixed_pair!(U17 => U35 (u8): to_u35, to_u17, sadd_u35, ssub_u35, smul_u35);
fixed_pair!(U17 => U44 (u8): to_u44, to_u17, sadd_u44, ssub_u44, smul_u44);
fixed_pair!(U17 => U53 (u8): to_u53, to_u17, sadd_u53, ssub_u53, smul_u53);
fixed_pair!(U17 => U62 (u8): to_u62, to_u17, sadd_u62, ssub_u62, smul_u62);
fixed_pair!(U17 => U71 (u8): to_u71, to_u17, sadd_u71, ssub_u71, smul_u71);
fixed_pair!(U17 => U80 (u8): to_u80, to_u17, sadd_u80, ssub_u80, smul_u80);
fixed_pair!(U17 => S17 (i8): to_s17, to_u17, sadd_s17, ssub_s17, smul_s17);
fixed_pair!(U17 => S26 (i8): to_s26, to_u17, sadd_s26, ssub_s26, smul_s26);
fixed_pair!(U17 => S35 (i8): to_s35, to_u17, sadd_s35, ssub_s35, smul_s35);
fixed_pair!(U17 => S44 (i8): to_s44, to_u17, sadd_s44, ssub_s44, smul_s44);
fixed_pair!(U17 => S53 (i8): to_s53, to_u17, sadd_s53, ssub_s53, smul_s53);
fixed_pair!(U17 => S62 (i8): to_s62, to_u17, sadd_s62, ssub_s62, smul_s62);
fixed_pair!(U17 => S71 (i8): to_s71, to_u17, sadd_s71, ssub_s71, smul_s71);
fixed_pair!(U17 => S80 (i8): to_s80, to_u17, sadd_s80, ssub_s80, smul_s80);

fixed_pair!(U26 => U08 (u8): to_u08, to_u26, sadd_u08, ssub_u08, smul_u08);
fixed_pair!(U26 => U17 (u8): to_u17, to_u26, sadd_u17, ssub_u17, smul_u17);
fixed_pair!(U26 => U35 (u8): to_u35, to_u26, sadd_u35, ssub_u35, smul_u35);
fixed_pair!(U26 => U44 (u8): to_u44, to_u26, sadd_u44, ssub_u44, smul_u44);
fixed_pair!(U26 => U53 (u8): to_u53, to_u26, sadd_u53, ssub_u53, smul_u53);
fixed_pair!(U26 => U62 (u8): to_u62, to_u26, sadd_u62, ssub_u62, smul_u62);
fixed_pair!(U26 => U71 (u8): to_u71, to_u26, sadd_u71, ssub_u71, smul_u71);
fixed_pair!(U26 => U80 (u8): to_u80, to_u26, sadd_u80, ssub_u80, smul_u80);
fixed_pair!(U26 => S17 (i8): to_s17, to_u26, sadd_s17, ssub_s17, smul_s17);
fixed_pair!(U26 => S26 (i8): to_s26, to_u26, sadd_s26, ssub_s26, smul_s26);
fixed_pair!(U26 => S35 (i8): to_s35, to_u26, sadd_s35, ssub_s35, smul_s35);
fixed_pair!(U26 => S44 (i8): to_s44, to_u26, sadd_s44, ssub_s44, smul_s44);
fixed_pair!(U26 => S53 (i8): to_s53, to_u26, sadd_s53, ssub_s53, smul_s53);
fixed_pair!(U26 => S62 (i8): to_s62, to_u26, sadd_s62, ssub_s62, smul_s62);
fixed_pair!(U26 => S71 (i8): to_s71, to_u26, sadd_s71, ssub_s71, smul_s71);
fixed_pair!(U26 => S80 (i8): to_s80, to_u26, sadd_s80, ssub_s80, smul_s80);

fixed_pair!(U35 => U08 (u8): to_u08, to_u35, sadd_u08, ssub_u08, smul_u08);
fixed_pair!(U35 => U17 (u8): to_u17, to_u35, sadd_u17, ssub_u17, smul_u17);
fixed_pair!(U35 => U26 (u8): to_u26, to_u35, sadd_u26, ssub_u26, smul_u26);
fixed_pair!(U35 => U44 (u8): to_u44, to_u35, sadd_u44, ssub_u44, smul_u44);
fixed_pair!(U35 => U53 (u8): to_u53, to_u35, sadd_u53, ssub_u53, smul_u53);
fixed_pair!(U35 => U62 (u8): to_u62, to_u35, sadd_u62, ssub_u62, smul_u62);
fixed_pair!(U35 => U71 (u8): to_u71, to_u35, sadd_u71, ssub_u71, smul_u71);
fixed_pair!(U35 => U80 (u8): to_u80, to_u35, sadd_u80, ssub_u80, smul_u80);
fixed_pair!(U35 => S17 (i8): to_s17, to_u35, sadd_s17, ssub_s17, smul_s17);
fixed_pair!(U35 => S26 (i8): to_s26, to_u35, sadd_s26, ssub_s26, smul_s26);
fixed_pair!(U35 => S35 (i8): to_s35, to_u35, sadd_s35, ssub_s35, smul_s35);
fixed_pair!(U35 => S44 (i8): to_s44, to_u35, sadd_s44, ssub_s44, smul_s44);
fixed_pair!(U35 => S53 (i8): to_s53, to_u35, sadd_s53, ssub_s53, smul_s53);
fixed_pair!(U35 => S62 (i8): to_s62, to_u35, sadd_s62, ssub_s62, smul_s62);
fixed_pair!(U35 => S71 (i8): to_s71, to_u35, sadd_s71, ssub_s71, smul_s71);
fixed_pair!(U35 => S80 (i8): to_s80, to_u35, sadd_s80, ssub_s80, smul_s80);

fixed_pair!(U44 => U08 (u8): to_u08, to_u44, sadd_u08, ssub_u08, smul_u08);
fixed_pair!(U44 => U17 (u8): to_u17, to_u44, sadd_u17, ssub_u17, smul_u17);
fixed_pair!(U44 => U26 (u8): to_u26, to_u44, sadd_u26, ssub_u26, smul_u26);
fixed_pair!(U44 => U35 (u8): to_u35, to_u44, sadd_u35, ssub_u35, smul_u35);
fixed_pair!(U44 => U53 (u8): to_u53, to_u44, sadd_u53, ssub_u53, smul_u53);
fixed_pair!(U44 => U62 (u8): to_u62, to_u44, sadd_u62, ssub_u62, smul_u62);
fixed_pair!(U44 => U71 (u8): to_u71, to_u44, sadd_u71, ssub_u71, smul_u71);
fixed_pair!(U44 => U80 (u8): to_u80, to_u44, sadd_u80, ssub_u80, smul_u80);
fixed_pair!(U44 => S17 (i8): to_s17, to_u44, sadd_s17, ssub_s17, smul_s17);
fixed_pair!(U44 => S26 (i8): to_s26, to_u44, sadd_s26, ssub_s26, smul_s26);
fixed_pair!(U44 => S35 (i8): to_s35, to_u44, sadd_s35, ssub_s35, smul_s35);
fixed_pair!(U44 => S44 (i8): to_s44, to_u44, sadd_s44, ssub_s44, smul_s44);
fixed_pair!(U44 => S53 (i8): to_s53, to_u44, sadd_s53, ssub_s53, smul_s53);
fixed_pair!(U44 => S62 (i8): to_s62, to_u44, sadd_s62, ssub_s62, smul_s62);
fixed_pair!(U44 => S71 (i8): to_s71, to_u44, sadd_s71, ssub_s71, smul_s71);
fixed_pair!(U44 => S80 (i8): to_s80, to_u44, sadd_s80, ssub_s80, smul_s80);

fixed_pair!(U53 => U08 (u8): to_u08, to_u53, sadd_u08, ssub_u08, smul_u08);
fixed_pair!(U53 => U17 (u8): to_u17, to_u53, sadd_u17, ssub_u17, smul_u17);
fixed_pair!(U53 => U26 (u8): to_u26, to_u53, sadd_u26, ssub_u26, smul_u26);
fixed_pair!(U53 => U35 (u8): to_u35, to_u53, sadd_u35, ssub_u35, smul_u35);
fixed_pair!(U53 => U44 (u8): to_u44, to_u53, sadd_u44, ssub_u44, smul_u44);
fixed_pair!(U53 => U62 (u8): to_u62, to_u53, sadd_u62, ssub_u62, smul_u62);
fixed_pair!(U53 => U71 (u8): to_u71, to_u53, sadd_u71, ssub_u71, smul_u71);
fixed_pair!(U53 => U80 (u8): to_u80, to_u53, sadd_u80, ssub_u80, smul_u80);
fixed_pair!(U53 => S17 (i8): to_s17, to_u53, sadd_s17, ssub_s17, smul_s17);
fixed_pair!(U53 => S26 (i8): to_s26, to_u53, sadd_s26, ssub_s26, smul_s26);
fixed_pair!(U53 => S35 (i8): to_s35, to_u53, sadd_s35, ssub_s35, smul_s35);
fixed_pair!(U53 => S44 (i8): to_s44, to_u53, sadd_s44, ssub_s44, smul_s44);
fixed_pair!(U53 => S53 (i8): to_s53, to_u53, sadd_s53, ssub_s53, smul_s53);
fixed_pair!(U53 => S62 (i8): to_s62, to_u53, sadd_s62, ssub_s62, smul_s62);
fixed_pair!(U53 => S71 (i8): to_s71, to_u53, sadd_s71, ssub_s71, smul_s71);
fixed_pair!(U53 => S80 (i8): to_s80, to_u53, sadd_s80, ssub_s80, smul_s80);

fixed_pair!(U62 => U08 (u8): to_u08, to_u62, sadd_u08, ssub_u08, smul_u08);
fixed_pair!(U62 => U17 (u8): to_u17, to_u62, sadd_u17, ssub_u17, smul_u17);
fixed_pair!(U62 => U26 (u8): to_u26, to_u62, sadd_u26, ssub_u26, smul_u26);
fixed_pair!(U62 => U35 (u8): to_u35, to_u62, sadd_u35, ssub_u35, smul_u35);
fixed_pair!(U62 => U44 (u8): to_u44, to_u62, sadd_u44, ssub_u44, smul_u44);
fixed_pair!(U62 => U53 (u8): to_u53, to_u62, sadd_u53, ssub_u53, smul_u53);
fixed_pair!(U62 => U71 (u8): to_u71, to_u62, sadd_u71, ssub_u71, smul_u71);
fixed_pair!(U62 => U80 (u8): to_u80, to_u62, sadd_u80, ssub_u80, smul_u80);
fixed_pair!(U62 => S17 (i8): to_s17, to_u62, sadd_s17, ssub_s17, smul_s17);
fixed_pair!(U62 => S26 (i8): to_s26, to_u62, sadd_s26, ssub_s26, smul_s26);
fixed_pair!(U62 => S35 (i8): to_s35, to_u62, sadd_s35, ssub_s35, smul_s35);
fixed_pair!(U62 => S44 (i8): to_s44, to_u62, sadd_s44, ssub_s44, smul_s44);
fixed_pair!(U62 => S53 (i8): to_s53, to_u62, sadd_s53, ssub_s53, smul_s53);
fixed_pair!(U62 => S62 (i8): to_s62, to_u62, sadd_s62, ssub_s62, smul_s62);
fixed_pair!(U62 => S71 (i8): to_s71, to_u62, sadd_s71, ssub_s71, smul_s71);
fixed_pair!(U62 => S80 (i8): to_s80, to_u62, sadd_s80, ssub_s80, smul_s80);

fixed_pair!(U71 => U08 (u8): to_u08, to_u71, sadd_u08, ssub_u08, smul_u08);
fixed_pair!(U71 => U17 (u8): to_u17, to_u71, sadd_u17, ssub_u17, smul_u17);
fixed_pair!(U71 => U26 (u8): to_u26, to_u71, sadd_u26, ssub_u26, smul_u26);
fixed_pair!(U71 => U35 (u8): to_u35, to_u71, sadd_u35, ssub_u35, smul_u35);
fixed_pair!(U71 => U44 (u8): to_u44, to_u71, sadd_u44, ssub_u44, smul_u44);
fixed_pair!(U71 => U53 (u8): to_u53, to_u71, sadd_u53, ssub_u53, smul_u53);
fixed_pair!(U71 => U62 (u8): to_u62, to_u71, sadd_u62, ssub_u62, smul_u62);
fixed_pair!(U71 => U80 (u8): to_u80, to_u71, sadd_u80, ssub_u80, smul_u80);
fixed_pair!(U71 => S17 (i8): to_s17, to_u71, sadd_s17, ssub_s17, smul_s17);
fixed_pair!(U71 => S26 (i8): to_s26, to_u71, sadd_s26, ssub_s26, smul_s26);
fixed_pair!(U71 => S35 (i8): to_s35, to_u71, sadd_s35, ssub_s35, smul_s35);
fixed_pair!(U71 => S44 (i8): to_s44, to_u71, sadd_s44, ssub_s44, smul_s44);
fixed_pair!(U71 => S53 (i8): to_s53, to_u71, sadd_s53, ssub_s53, smul_s53);
fixed_pair!(U71 => S62 (i8): to_s62, to_u71, sadd_s62, ssub_s62, smul_s62);
fixed_pair!(U71 => S71 (i8): to_s71, to_u71, sadd_s71, ssub_s71, smul_s71);
fixed_pair!(U71 => S80 (i8): to_s80, to_u71, sadd_s80, ssub_s80, smul_s80);

fixed_pair!(U80 => U08 (u8): to_u08, to_u80, sadd_u08, ssub_u08, smul_u08);
fixed_pair!(U80 => U17 (u8): to_u17, to_u80, sadd_u17, ssub_u17, smul_u17);
fixed_pair!(U80 => U26 (u8): to_u26, to_u80, sadd_u26, ssub_u26, smul_u26);
fixed_pair!(U80 => U35 (u8): to_u35, to_u80, sadd_u35, ssub_u35, smul_u35);
fixed_pair!(U80 => U44 (u8): to_u44, to_u80, sadd_u44, ssub_u44, smul_u44);
fixed_pair!(U80 => U53 (u8): to_u53, to_u80, sadd_u53, ssub_u53, smul_u53);
fixed_pair!(U80 => U62 (u8): to_u62, to_u80, sadd_u62, ssub_u62, smul_u62);
fixed_pair!(U80 => U71 (u8): to_u71, to_u80, sadd_u71, ssub_u71, smul_u71);
fixed_pair!(U80 => S17 (i8): to_s17, to_u80, sadd_s17, ssub_s17, smul_s17);
fixed_pair!(U80 => S26 (i8): to_s26, to_u80, sadd_s26, ssub_s26, smul_s26);
fixed_pair!(U80 => S35 (i8): to_s35, to_u80, sadd_s35, ssub_s35, smul_s35);
fixed_pair!(U80 => S44 (i8): to_s44, to_u80, sadd_s44, ssub_s44, smul_s44);
fixed_pair!(U80 => S53 (i8): to_s53, to_u80, sadd_s53, ssub_s53, smul_s53);
fixed_pair!(U80 => S62 (i8): to_s62, to_u80, sadd_s62, ssub_s62, smul_s62);
fixed_pair!(U80 => S71 (i8): to_s71, to_u80, sadd_s71, ssub_s71, smul_s71);
fixed_pair!(U80 => S80 (i8): to_s80, to_u80, sadd_s80, ssub_s80, smul_s80);

fixed_pair!(S17 => U08 (u8): to_u08, to_s17, sadd_u08, ssub_u08, smul_u08);
fixed_pair!(S17 => U17 (u8): to_u17, to_s17, sadd_u17, ssub_u17, smul_u17);
fixed_pair!(S17 => U26 (u8): to_u26, to_s17, sadd_u26, ssub_u26, smul_u26);
fixed_pair!(S17 => U35 (u8): to_u35, to_s17, sadd_u35, ssub_u35, smul_u35);
fixed_pair!(S17 => U44 (u8): to_u44, to_s17, sadd_u44, ssub_u44, smul_u44);
fixed_pair!(S17 => U53 (u8): to_u53, to_s17, sadd_u53, ssub_u53, smul_u53);
fixed_pair!(S17 => U62 (u8): to_u62, to_s17, sadd_u62, ssub_u62, smul_u62);
fixed_pair!(S17 => U71 (u8): to_u71, to_s17, sadd_u71, ssub_u71, smul_u71);
fixed_pair!(S17 => U80 (u8): to_u80, to_s17, sadd_u80, ssub_u80, smul_u80);
fixed_pair!(S17 => S26 (i8): to_s26, to_s17, sadd_s26, ssub_s26, smul_s26);
fixed_pair!(S17 => S35 (i8): to_s35, to_s17, sadd_s35, ssub_s35, smul_s35);
fixed_pair!(S17 => S44 (i8): to_s44, to_s17, sadd_s44, ssub_s44, smul_s44);
fixed_pair!(S17 => S53 (i8): to_s53, to_s17, sadd_s53, ssub_s53, smul_s53);
fixed_pair!(S17 => S62 (i8): to_s62, to_s17, sadd_s62, ssub_s62, smul_s62);
fixed_pair!(S17 => S71 (i8): to_s71, to_s17, sadd_s71, ssub_s71, smul_s71);
fixed_pair!(S17 => S80 (i8): to_s80, to_s17, sadd_s80, ssub_s80, smul_s80);

fixed_pair!(S26 => U08 (u8): to_u08, to_s26, sadd_u08, ssub_u08, smul_u08);
fixed_pair!(S26 => U17 (u8): to_u17, to_s26, sadd_u17, ssub_u17, smul_u17);
fixed_pair!(S26 => U26 (u8): to_u26, to_s26, sadd_u26, ssub_u26, smul_u26);
fixed_pair!(S26 => U35 (u8): to_u35, to_s26, sadd_u35, ssub_u35, smul_u35);
fixed_pair!(S26 => U44 (u8): to_u44, to_s26, sadd_u44, ssub_u44, smul_u44);
fixed_pair!(S26 => U53 (u8): to_u53, to_s26, sadd_u53, ssub_u53, smul_u53);
fixed_pair!(S26 => U62 (u8): to_u62, to_s26, sadd_u62, ssub_u62, smul_u62);
fixed_pair!(S26 => U71 (u8): to_u71, to_s26, sadd_u71, ssub_u71, smul_u71);
fixed_pair!(S26 => U80 (u8): to_u80, to_s26, sadd_u80, ssub_u80, smul_u80);
fixed_pair!(S26 => S17 (i8): to_s17, to_s26, sadd_s17, ssub_s17, smul_s17);
fixed_pair!(S26 => S35 (i8): to_s35, to_s26, sadd_s35, ssub_s35, smul_s35);
fixed_pair!(S26 => S44 (i8): to_s44, to_s26, sadd_s44, ssub_s44, smul_s44);
fixed_pair!(S26 => S53 (i8): to_s53, to_s26, sadd_s53, ssub_s53, smul_s53);
fixed_pair!(S26 => S62 (i8): to_s62, to_s26, sadd_s62, ssub_s62, smul_s62);
fixed_pair!(S26 => S71 (i8): to_s71, to_s26, sadd_s71, ssub_s71, smul_s71);
fixed_pair!(S26 => S80 (i8): to_s80, to_s26, sadd_s80, ssub_s80, smul_s80);

fixed_pair!(S35 => U08 (u8): to_u08, to_s35, sadd_u08, ssub_u08, smul_u08);
fixed_pair!(S35 => U17 (u8): to_u17, to_s35, sadd_u17, ssub_u17, smul_u17);
fixed_pair!(S35 => U26 (u8): to_u26, to_s35, sadd_u26, ssub_u26, smul_u26);
fixed_pair!(S35 => U35 (u8): to_u35, to_s35, sadd_u35, ssub_u35, smul_u35);
fixed_pair!(S35 => U44 (u8): to_u44, to_s35, sadd_u44, ssub_u44, smul_u44);
fixed_pair!(S35 => U53 (u8): to_u53, to_s35, sadd_u53, ssub_u53, smul_u53);
fixed_pair!(S35 => U62 (u8): to_u62, to_s35, sadd_u62, ssub_u62, smul_u62);
fixed_pair!(S35 => U71 (u8): to_u71, to_s35, sadd_u71, ssub_u71, smul_u71);
fixed_pair!(S35 => U80 (u8): to_u80, to_s35, sadd_u80, ssub_u80, smul_u80);
fixed_pair!(S35 => S17 (i8): to_s17, to_s35, sadd_s17, ssub_s17, smul_s17);
fixed_pair!(S35 => S26 (i8): to_s26, to_s35, sadd_s26, ssub_s26, smul_s26);
fixed_pair!(S35 => S44 (i8): to_s44, to_s35, sadd_s44, ssub_s44, smul_s44);
fixed_pair!(S35 => S53 (i8): to_s53, to_s35, sadd_s53, ssub_s53, smul_s53);
fixed_pair!(S35 => S62 (i8): to_s62, to_s35, sadd_s62, ssub_s62, smul_s62);
fixed_pair!(S35 => S71 (i8): to_s71, to_s35, sadd_s71, ssub_s71, smul_s71);
fixed_pair!(S35 => S80 (i8): to_s80, to_s35, sadd_s80, ssub_s80, smul_s80);

fixed_pair!(S44 => U08 (u8): to_u08, to_s44, sadd_u08, ssub_u08, smul_u08);
fixed_pair!(S44 => U17 (u8): to_u17, to_s44, sadd_u17, ssub_u17, smul_u17);
fixed_pair!(S44 => U26 (u8): to_u26, to_s44, sadd_u26, ssub_u26, smul_u26);
fixed_pair!(S44 => U35 (u8): to_u35, to_s44, sadd_u35, ssub_u35, smul_u35);
fixed_pair!(S44 => U44 (u8): to_u44, to_s44, sadd_u44, ssub_u44, smul_u44);
fixed_pair!(S44 => U53 (u8): to_u53, to_s44, sadd_u53, ssub_u53, smul_u53);
fixed_pair!(S44 => U62 (u8): to_u62, to_s44, sadd_u62, ssub_u62, smul_u62);
fixed_pair!(S44 => U71 (u8): to_u71, to_s44, sadd_u71, ssub_u71, smul_u71);
fixed_pair!(S44 => U80 (u8): to_u80, to_s44, sadd_u80, ssub_u80, smul_u80);
fixed_pair!(S44 => S17 (i8): to_s17, to_s44, sadd_s17, ssub_s17, smul_s17);
fixed_pair!(S44 => S26 (i8): to_s26, to_s44, sadd_s26, ssub_s26, smul_s26);
fixed_pair!(S44 => S35 (i8): to_s35, to_s44, sadd_s35, ssub_s35, smul_s35);
fixed_pair!(S44 => S53 (i8): to_s53, to_s44, sadd_s53, ssub_s53, smul_s53);
fixed_pair!(S44 => S62 (i8): to_s62, to_s44, sadd_s62, ssub_s62, smul_s62);
fixed_pair!(S44 => S71 (i8): to_s71, to_s44, sadd_s71, ssub_s71, smul_s71);
fixed_pair!(S44 => S80 (i8): to_s80, to_s44, sadd_s80, ssub_s80, smul_s80);

fixed_pair!(S53 => U08 (u8): to_u08, to_s53, sadd_u08, ssub_u08, smul_u08);
fixed_pair!(S53 => U17 (u8): to_u17, to_s53, sadd_u17, ssub_u17, smul_u17);
fixed_pair!(S53 => U26 (u8): to_u26, to_s53, sadd_u26, ssub_u26, smul_u26);
fixed_pair!(S53 => U35 (u8): to_u35, to_s53, sadd_u35, ssub_u35, smul_u35);
fixed_pair!(S53 => U44 (u8): to_u44, to_s53, sadd_u44, ssub_u44, smul_u44);
fixed_pair!(S53 => U53 (u8): to_u53, to_s53, sadd_u53, ssub_u53, smul_u53);
fixed_pair!(S53 => U62 (u8): to_u62, to_s53, sadd_u62, ssub_u62, smul_u62);
fixed_pair!(S53 => U71 (u8): to_u71, to_s53, sadd_u71, ssub_u71, smul_u71);
fixed_pair!(S53 => U80 (u8): to_u80, to_s53, sadd_u80, ssub_u80, smul_u80);
fixed_pair!(S53 => S17 (i8): to_s17, to_s53, sadd_s17, ssub_s17, smul_s17);
fixed_pair!(S53 => S26 (i8): to_s26, to_s53, sadd_s26, ssub_s26, smul_s26);
fixed_pair!(S53 => S35 (i8): to_s35, to_s53, sadd_s35, ssub_s35, smul_s35);
fixed_pair!(S53 => S44 (i8): to_s44, to_s53, sadd_s44, ssub_s44, smul_s44);
fixed_pair!(S53 => S62 (i8): to_s62, to_s53, sadd_s62, ssub_s62, smul_s62);
fixed_pair!(S53 => S71 (i8): to_s71, to_s53, sadd_s71, ssub_s71, smul_s71);
fixed_pair!(S53 => S80 (i8): to_s80, to_s53, sadd_s80, ssub_s80, smul_s80);

fixed_pair!(S62 => U08 (u8): to_u08, to_s62, sadd_u08, ssub_u08, smul_u08);
fixed_pair!(S62 => U17 (u8): to_u17, to_s62, sadd_u17, ssub_u17, smul_u17);
fixed_pair!(S62 => U26 (u8): to_u26, to_s62, sadd_u26, ssub_u26, smul_u26);
fixed_pair!(S62 => U35 (u8): to_u35, to_s62, sadd_u35, ssub_u35, smul_u35);
fixed_pair!(S62 => U44 (u8): to_u44, to_s62, sadd_u44, ssub_u44, smul_u44);
fixed_pair!(S62 => U53 (u8): to_u53, to_s62, sadd_u53, ssub_u53, smul_u53);
fixed_pair!(S62 => U62 (u8): to_u62, to_s62, sadd_u62, ssub_u62, smul_u62);
fixed_pair!(S62 => U71 (u8): to_u71, to_s62, sadd_u71, ssub_u71, smul_u71);
fixed_pair!(S62 => U80 (u8): to_u80, to_s62, sadd_u80, ssub_u80, smul_u80);
fixed_pair!(S62 => S17 (i8): to_s17, to_s62, sadd_s17, ssub_s17, smul_s17);
fixed_pair!(S62 => S26 (i8): to_s26, to_s62, sadd_s26, ssub_s26, smul_s26);
fixed_pair!(S62 => S35 (i8): to_s35, to_s62, sadd_s35, ssub_s35, smul_s35);
fixed_pair!(S62 => S44 (i8): to_s44, to_s62, sadd_s44, ssub_s44, smul_s44);
fixed_pair!(S62 => S53 (i8): to_s53, to_s62, sadd_s53, ssub_s53, smul_s53);
fixed_pair!(S62 => S71 (i8): to_s71, to_s62, sadd_s71, ssub_s71, smul_s71);
fixed_pair!(S62 => S80 (i8): to_s80, to_s62, sadd_s80, ssub_s80, smul_s80);

fixed_pair!(S71 => U08 (u8): to_u08, to_s71, sadd_u08, ssub_u08, smul_u08);
fixed_pair!(S71 => U17 (u8): to_u17, to_s71, sadd_u17, ssub_u17, smul_u17);
fixed_pair!(S71 => U26 (u8): to_u26, to_s71, sadd_u26, ssub_u26, smul_u26);
fixed_pair!(S71 => U35 (u8): to_u35, to_s71, sadd_u35, ssub_u35, smul_u35);
fixed_pair!(S71 => U44 (u8): to_u44, to_s71, sadd_u44, ssub_u44, smul_u44);
fixed_pair!(S71 => U53 (u8): to_u53, to_s71, sadd_u53, ssub_u53, smul_u53);
fixed_pair!(S71 => U62 (u8): to_u62, to_s71, sadd_u62, ssub_u62, smul_u62);
fixed_pair!(S71 => U71 (u8): to_u71, to_s71, sadd_u71, ssub_u71, smul_u71);
fixed_pair!(S71 => U80 (u8): to_u80, to_s71, sadd_u80, ssub_u80, smul_u80);
fixed_pair!(S71 => S17 (i8): to_s17, to_s71, sadd_s17, ssub_s17, smul_s17);
fixed_pair!(S71 => S26 (i8): to_s26, to_s71, sadd_s26, ssub_s26, smul_s26);
fixed_pair!(S71 => S35 (i8): to_s35, to_s71, sadd_s35, ssub_s35, smul_s35);
fixed_pair!(S71 => S44 (i8): to_s44, to_s71, sadd_s44, ssub_s44, smul_s44);
fixed_pair!(S71 => S53 (i8): to_s53, to_s71, sadd_s53, ssub_s53, smul_s53);
fixed_pair!(S71 => S62 (i8): to_s62, to_s71, sadd_s62, ssub_s62, smul_s62);
fixed_pair!(S71 => S80 (i8): to_s80, to_s71, sadd_s80, ssub_s80, smul_s80);

fixed_pair!(S80 => U08 (u8): to_u08, to_s80, sadd_u08, ssub_u08, smul_u08);
fixed_pair!(S80 => U17 (u8): to_u17, to_s80, sadd_u17, ssub_u17, smul_u17);
fixed_pair!(S80 => U26 (u8): to_u26, to_s80, sadd_u26, ssub_u26, smul_u26);
fixed_pair!(S80 => U35 (u8): to_u35, to_s80, sadd_u35, ssub_u35, smul_u35);
fixed_pair!(S80 => U44 (u8): to_u44, to_s80, sadd_u44, ssub_u44, smul_u44);
fixed_pair!(S80 => U53 (u8): to_u53, to_s80, sadd_u53, ssub_u53, smul_u53);
fixed_pair!(S80 => U62 (u8): to_u62, to_s80, sadd_u62, ssub_u62, smul_u62);
fixed_pair!(S80 => U71 (u8): to_u71, to_s80, sadd_u71, ssub_u71, smul_u71);
fixed_pair!(S80 => U80 (u8): to_u80, to_s80, sadd_u80, ssub_u80, smul_u80);
fixed_pair!(S80 => S17 (i8): to_s17, to_s80, sadd_s17, ssub_s17, smul_s17);
fixed_pair!(S80 => S26 (i8): to_s26, to_s80, sadd_s26, ssub_s26, smul_s26);
fixed_pair!(S80 => S35 (i8): to_s35, to_s80, sadd_s35, ssub_s35, smul_s35);
fixed_pair!(S80 => S44 (i8): to_s44, to_s80, sadd_s44, ssub_s44, smul_s44);
fixed_pair!(S80 => S53 (i8): to_s53, to_s80, sadd_s53, ssub_s53, smul_s53);
fixed_pair!(S80 => S62 (i8): to_s62, to_s80, sadd_s62, ssub_s62, smul_s62);
fixed_pair!(S80 => S71 (i8): to_s71, to_s80, sadd_s71, ssub_s71, smul_s71);
