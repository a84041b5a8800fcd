mod common;

use codicefiscale_core::omocodes;
use common::codec;

const CCCFBA85D03L219P_OMOCODES: [&str; 128] = [
    "CCCFBA85D03L219P", "CCCFBA85D03L21VE", "CCCFBA85D03L2M9A", "CCCFBA85D03LN19E",
    "CCCFBA85D0PL219L", "CCCFBA85DL3L219A", "CCCFBA8RD03L219B", "CCCFBAU5D03L219M",
    "CCCFBA85D03L2MVP", "CCCFBA85D03LN1VT", "CCCFBA85D0PL21VA", "CCCFBA85DL3L21VP",
    "CCCFBA8RD03L21VQ", "CCCFBAU5D03L21VB", "CCCFBA85D03LNM9P", "CCCFBA85D0PL2M9W",
    "CCCFBA85DL3L2M9L", "CCCFBA8RD03L2M9M", "CCCFBAU5D03L2M9X", "CCCFBA85D0PLN19A",
    "CCCFBA85DL3LN19P", "CCCFBA8RD03LN19Q", "CCCFBAU5D03LN19B", "CCCFBA85DLPL219W",
    "CCCFBA8RD0PL219X", "CCCFBAU5D0PL219I", "CCCFBA8RDL3L219M", "CCCFBAU5DL3L219X",
    "CCCFBAURD03L219Y", "CCCFBA85D03LNMVE", "CCCFBA85D0PL2MVL", "CCCFBA85DL3L2MVA",
    "CCCFBA8RD03L2MVB", "CCCFBAU5D03L2MVM", "CCCFBA85D0PLN1VP", "CCCFBA85DL3LN1VE",
    "CCCFBA8RD03LN1VF", "CCCFBAU5D03LN1VQ", "CCCFBA85DLPL21VL", "CCCFBA8RD0PL21VM",
    "CCCFBAU5D0PL21VX", "CCCFBA8RDL3L21VB", "CCCFBAU5DL3L21VM", "CCCFBAURD03L21VN",
    "CCCFBA85D0PLNM9L", "CCCFBA85DL3LNM9A", "CCCFBA8RD03LNM9B", "CCCFBAU5D03LNM9M",
    "CCCFBA85DLPL2M9H", "CCCFBA8RD0PL2M9I", "CCCFBAU5D0PL2M9T", "CCCFBA8RDL3L2M9X",
    "CCCFBAU5DL3L2M9I", "CCCFBAURD03L2M9J", "CCCFBA85DLPLN19L", "CCCFBA8RD0PLN19M",
    "CCCFBAU5D0PLN19X", "CCCFBA8RDL3LN19B", "CCCFBAU5DL3LN19M", "CCCFBAURD03LN19N",
    "CCCFBA8RDLPL219I", "CCCFBAU5DLPL219T", "CCCFBAURD0PL219U", "CCCFBAURDL3L219J",
    "CCCFBA85D0PLNMVA", "CCCFBA85DL3LNMVP", "CCCFBA8RD03LNMVQ", "CCCFBAU5D03LNMVB",
    "CCCFBA85DLPL2MVW", "CCCFBA8RD0PL2MVX", "CCCFBAU5D0PL2MVI", "CCCFBA8RDL3L2MVM",
    "CCCFBAU5DL3L2MVX", "CCCFBAURD03L2MVY", "CCCFBA85DLPLN1VA", "CCCFBA8RD0PLN1VB",
    "CCCFBAU5D0PLN1VM", "CCCFBA8RDL3LN1VQ", "CCCFBAU5DL3LN1VB", "CCCFBAURD03LN1VC",
    "CCCFBA8RDLPL21VX", "CCCFBAU5DLPL21VI", "CCCFBAURD0PL21VJ", "CCCFBAURDL3L21VY",
    "CCCFBA85DLPLNM9W", "CCCFBA8RD0PLNM9X", "CCCFBAU5D0PLNM9I", "CCCFBA8RDL3LNM9M",
    "CCCFBAU5DL3LNM9X", "CCCFBAURD03LNM9Y", "CCCFBA8RDLPL2M9T", "CCCFBAU5DLPL2M9E",
    "CCCFBAURD0PL2M9F", "CCCFBAURDL3L2M9U", "CCCFBA8RDLPLN19X", "CCCFBAU5DLPLN19I",
    "CCCFBAURD0PLN19J", "CCCFBAURDL3LN19Y", "CCCFBAURDLPL219F", "CCCFBA85DLPLNMVL",
    "CCCFBA8RD0PLNMVM", "CCCFBAU5D0PLNMVX", "CCCFBA8RDL3LNMVB", "CCCFBAU5DL3LNMVM",
    "CCCFBAURD03LNMVN", "CCCFBA8RDLPL2MVI", "CCCFBAU5DLPL2MVT", "CCCFBAURD0PL2MVU",
    "CCCFBAURDL3L2MVJ", "CCCFBA8RDLPLN1VM", "CCCFBAU5DLPLN1VX", "CCCFBAURD0PLN1VY",
    "CCCFBAURDL3LN1VN", "CCCFBAURDLPL21VU", "CCCFBA8RDLPLNM9I", "CCCFBAU5DLPLNM9T",
    "CCCFBAURD0PLNM9U", "CCCFBAURDL3LNM9J", "CCCFBAURDLPL2M9Q", "CCCFBAURDLPLN19U",
    "CCCFBA8RDLPLNMVX", "CCCFBAU5DLPLNMVI", "CCCFBAURD0PLNMVJ", "CCCFBAURDL3LNMVY",
    "CCCFBAURDLPL2MVF", "CCCFBAURDLPLN1VJ", "CCCFBAURDLPLNM9F", "CCCFBAURDLPLNMVU",
];

#[test]
fn omocodes_of_canonical_code() {
    let codes = omocodes("CCCFBA85D03L219P").unwrap();
    assert_eq!(codes, CCCFBA85D03L219P_OMOCODES);
}

#[test]
fn every_variant_yields_the_same_list() {
    for variant in ["CCCFBA85D03L21VE", "CCCFBAURDLPLNMVU", "cccfba85d0pl219l"] {
        assert_eq!(omocodes(variant).unwrap(), CCCFBA85D03L219P_OMOCODES, "{variant}");
    }
}

#[test]
fn decode_lists_omocodes() {
    let decoded = codec().decode("CCCFBA8RDLPLNMVX").unwrap();
    assert_eq!(decoded.omocodes, CCCFBA85D03L219P_OMOCODES);
}

#[test]
fn every_omocode_is_valid() {
    let codec = codec();
    for code in CCCFBA85D03L219P_OMOCODES {
        assert!(codec.is_valid(code), "{code}");
    }
    assert_eq!(
        CCCFBA85D03L219P_OMOCODES
            .iter()
            .filter(|code| codec.is_omocode(code))
            .count(),
        127
    );
}
